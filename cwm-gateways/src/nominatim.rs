use crate::http;
use cwm_core::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use cwm_entities::geo::MapPoint;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Geocoding with the OpenStreetMap Nominatim search API.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    api_url: String,
}

impl Nominatim {
    pub fn try_new(api_url: String, user_agent: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = http::client(user_agent, timeout)?;
        Ok(Self { client, api_url })
    }
}

// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn first_location(body: &str) -> Result<Option<MapPoint>, GeoCodingError> {
    let places: Vec<Place> = serde_json::from_str(body).map_err(http::invalid_body)?;
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lat = place.lat.parse::<f64>();
    let lng = place.lon.parse::<f64>();
    match (lat, lng) {
        (Ok(lat), Ok(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
            .map(Some)
            .ok_or_else(|| GeoCodingError::Service(format!("Invalid position {lat},{lng}"))),
        _ => Err(GeoCodingError::Service(format!(
            "Invalid position {},{}",
            place.lat, place.lon
        ))),
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(http::request_error)?;
        let body = http::response_text(response)?;
        first_location(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_server::*, DEFAULT_USER_AGENT};

    #[test]
    fn parse_first_result() {
        let body = r#"[
            {"place_id":1,"lat":"48.8606","lon":"2.3376","display_name":"Louvre"},
            {"place_id":2,"lat":"0","lon":"0","display_name":"Null Island"}
        ]"#;
        let pos = first_location(body).unwrap().unwrap();
        assert_eq!(48.8606, pos.lat());
        assert_eq!(2.3376, pos.lng());
    }

    #[test]
    fn parse_empty_result() {
        assert_eq!(None, first_location("[]").unwrap());
    }

    #[test]
    fn parse_invalid_results() {
        assert!(matches!(
            first_location("{}"),
            Err(GeoCodingError::Service(_))
        ));
        assert!(matches!(
            first_location(r#"[{"lat":"north","lon":"2.3"}]"#),
            Err(GeoCodingError::Service(_))
        ));
        assert!(matches!(
            first_location(r#"[{"lat":"95.0","lon":"2.3"}]"#),
            Err(GeoCodingError::Service(_))
        ));
    }

    #[test]
    fn resolve_with_local_server() {
        let url = serve_once(json_response(r#"[{"lat":"48.86","lon":"2.35"}]"#));
        let gw = Nominatim::try_new(url, DEFAULT_USER_AGENT, Duration::from_secs(2)).unwrap();
        let pos = gw.resolve_address_lat_lng("Paris").unwrap().unwrap();
        assert_eq!(48.86, pos.lat());
        assert_eq!(2.35, pos.lng());
    }

    #[test]
    fn send_search_query_with_user_agent() {
        let (url, rx) = serve_once_recording(json_response("[]"));
        let gw = Nominatim::try_new(
            format!("{url}search"),
            DEFAULT_USER_AGENT,
            Duration::from_secs(2),
        )
        .unwrap();
        gw.resolve_address_lat_lng("1 Rue de Rivoli, Paris").unwrap();
        let request = received_request(&rx);
        assert!(request.starts_with(
            "GET /search?q=1+Rue+de+Rivoli%2C+Paris&format=json&limit=1 HTTP/1.1\r\n"
        ));
        assert_eq!(Some(DEFAULT_USER_AGENT), header(&request, "User-Agent"));
    }

    #[test]
    fn resolve_without_match() {
        let url = serve_once(json_response("[]"));
        let gw = Nominatim::try_new(url, DEFAULT_USER_AGENT, Duration::from_secs(2)).unwrap();
        assert_eq!(None, gw.resolve_address_lat_lng("Nowhere").unwrap());
    }
}
