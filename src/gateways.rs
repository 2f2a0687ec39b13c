use crate::config::{Geocoding, GeocodingGateway};
use anyhow::{anyhow, Result};
use cwm_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingError, GeoCodingGateway},
};
use cwm_gateways::{nominatim::Nominatim, opencage::OpenCage};

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<GeoGw> {
    let Geocoding {
        gateway,
        user_agent,
        timeout,
        ..
    } = cfg;
    let gw = match gateway {
        GeocodingGateway::Nominatim { api_url } => {
            log::info!("Use Nominatim geocoding gateway");
            GeoGw::new(Nominatim::try_new(api_url.clone(), user_agent, *timeout)?)
        }
        GeocodingGateway::OpenCage { api_url, api_key } => {
            let api_key = api_key
                .clone()
                .ok_or_else(|| anyhow!("No OpenCage API key found"))?;
            log::info!("Use OpenCage geocoding gateway");
            GeoGw::new(OpenCage::try_new(
                api_url.clone(),
                api_key,
                user_agent,
                *timeout,
            )?)
        }
    };
    Ok(gw)
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        self.0.resolve_address_lat_lng(address)
    }
}
