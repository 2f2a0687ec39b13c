use crate::http;
use cwm_core::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use cwm_entities::geo::MapPoint;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Geocoding with the OpenCage forward geocoding API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OpenCage {
    pub fn try_new(
        api_url: String,
        api_key: String,
        user_agent: &str,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = http::client(user_agent, timeout)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    results: Vec<ForwardResult>,
}

#[derive(Debug, Deserialize)]
struct ForwardResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn first_location(body: &str) -> Result<Option<MapPoint>, GeoCodingError> {
    let res: ForwardResponse = serde_json::from_str(body).map_err(http::invalid_body)?;
    let Some(ForwardResult {
        geometry: Geometry { lat, lng },
    }) = res.results.first()
    else {
        return Ok(None);
    };
    MapPoint::try_from_lat_lng_deg(*lat, *lng)
        .map(Some)
        .ok_or_else(|| GeoCodingError::Service(format!("Invalid position {lat},{lng}")))
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", address),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
                ("no_annotations", "1"),
            ])
            .send()
            .map_err(http::request_error)?;
        let body = http::response_text(response)?;
        first_location(&body)
    }
}
