use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("coworkmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub input: Option<Input>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub report: Option<Report>,
    pub map: Option<Map>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Input {
    pub sentinel: Option<String>,
    pub delimiter: Option<char>,
}

impl Default for Input {
    fn default() -> Self {
        Config::default().input.expect("Input configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub user_agent: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    pub max_retries: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub retry_backoff: Option<Duration>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub api_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    pub title: Option<String>,
}

impl Default for Report {
    fn default() -> Self {
        Config::default().report.expect("Report configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom: Option<u8>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}
