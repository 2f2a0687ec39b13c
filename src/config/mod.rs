use anyhow::{anyhow, Result};
use cwm_core::{entities::MapPoint, usecases::RetryPolicy};
use cwm_report::MapView;
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "coworkmap.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub input: Input,
    pub geocoding: Geocoding,
    pub report: Report,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&fs::read_to_string(file_path)?)?
            }
            None => {
                log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                    Ok(cfg_string) => toml::from_str(&cfg_string)?,
                    Err(err) => match err.kind() {
                        ErrorKind::NotFound => {
                            log::debug!(
                                "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                            );
                            Ok(raw::Config::default())
                        }
                        _ => Err(err),
                    }?,
                }
            }
        };
        let api_key = env::var(ENV_NAME_OPENCAGE_API_KEY).ok();
        Self::try_from_raw(raw_config, api_key)
    }

    fn try_from_raw(raw_config: raw::Config, opencage_api_key: Option<String>) -> Result<Self> {
        let mut cfg = Self::try_from(raw_config)?;
        if let Some(key) = opencage_api_key {
            if let GeocodingGateway::OpenCage { ref mut api_key, .. } = cfg.geocoding.gateway {
                *api_key = Some(key);
            }
        }
        if let GeocodingGateway::OpenCage { api_key: None, .. } = cfg.geocoding.gateway {
            return Err(anyhow!(
                "Missing OpenCage API key: set 'gateway.opencage.api-key' or {ENV_NAME_OPENCAGE_API_KEY}"
            ));
        }
        Ok(cfg)
    }
}

pub struct Input {
    /// Cell content that marks missing data
    pub sentinel: String,
    /// Field separator of the CSV file
    pub delimiter: u8,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub user_agent: String,
    /// Maximum duration of a single request
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        api_url: String,
    },
    OpenCage {
        api_url: String,
        api_key: Option<String>,
    },
}

pub struct Report {
    pub title: String,
    pub map: MapView,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!("Missing '{name}' configuration"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            input,
            geocoding,
            gateway,
            report,
            map,
        } = from;

        let input_defaults = raw::Input::default();
        let raw::Input {
            sentinel,
            delimiter,
        } = input.unwrap_or_default();
        let sentinel = required(sentinel.or(input_defaults.sentinel), "input.sentinel")?;
        let delimiter = required(delimiter.or(input_defaults.delimiter), "input.delimiter")?;
        let delimiter = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| anyhow!("The CSV delimiter '{delimiter}' is not an ASCII character"))?;
        let input = Input {
            sentinel,
            delimiter,
        };

        let defaults = raw::Geocoding::default();
        let raw::Geocoding {
            gateway: gw_name,
            user_agent,
            timeout,
            max_retries,
            retry_backoff,
        } = geocoding.unwrap_or_default();

        let gw_name = required(gw_name.or(defaults.gateway), "geocoding.gateway")?;
        let user_agent = required(user_agent.or(defaults.user_agent), "geocoding.user-agent")?;
        let timeout = required(timeout.or(defaults.timeout), "geocoding.timeout")?;
        let max_retries = required(max_retries.or(defaults.max_retries), "geocoding.max-retries")?;
        let backoff = required(
            retry_backoff.or(defaults.retry_backoff),
            "geocoding.retry-backoff",
        )?;
        if timeout.is_zero() {
            return Err(anyhow!("The geocoding timeout must not be zero"));
        }

        let gateway_defaults = raw::Gateway::default();
        let gateway = gateway.unwrap_or_else(|| gateway_defaults.clone());
        let gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim { api_url } = gateway.nominatim.unwrap_or_else(|| {
                    raw::Nominatim { api_url: None }
                });
                let api_url = api_url
                    .or_else(|| gateway_defaults.nominatim.and_then(|d| d.api_url));
                let api_url = required(api_url, "gateway.nominatim.api-url")?;
                log::debug!("Use Nominatim geocoding gateway ({api_url})");
                GeocodingGateway::Nominatim { api_url }
            }
            raw::GeocodingGateway::Opencage => {
                let raw::OpenCage { api_url, api_key } =
                    gateway.opencage.unwrap_or_else(|| raw::OpenCage {
                        api_url: None,
                        api_key: None,
                    });
                let api_url =
                    api_url.or_else(|| gateway_defaults.opencage.and_then(|d| d.api_url));
                let api_url = required(api_url, "gateway.opencage.api-url")?;
                log::debug!("Use OpenCage geocoding gateway ({api_url})");
                GeocodingGateway::OpenCage { api_url, api_key }
            }
        };

        let geocoding = Geocoding {
            gateway,
            user_agent,
            timeout,
            retry: RetryPolicy {
                max_retries,
                backoff,
            },
        };

        let raw::Report { title } = report.unwrap_or_default();
        let title = required(title.or(raw::Report::default().title), "report.title")?;

        let map_defaults = raw::Map::default();
        let raw::Map {
            center_lat,
            center_lng,
            zoom,
        } = map.unwrap_or_default();
        let lat = required(center_lat.or(map_defaults.center_lat), "map.center-lat")?;
        let lng = required(center_lng.or(map_defaults.center_lng), "map.center-lng")?;
        let zoom = required(zoom.or(map_defaults.zoom), "map.zoom")?;
        let center = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| anyhow!("Invalid map center {lat},{lng}"))?;

        let report = Report {
            title,
            map: MapView { center, zoom },
        };

        Ok(Self {
            input,
            geocoding,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> raw::Config {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from_raw(raw::Config::default(), None).unwrap();
        assert_eq!("Non disponible", cfg.input.sentinel);
        assert_eq!(
            GeocodingGateway::Nominatim {
                api_url: cwm_gateways::nominatim::DEFAULT_API_URL.into()
            },
            cfg.geocoding.gateway
        );
        assert_eq!(cwm_gateways::DEFAULT_USER_AGENT, cfg.geocoding.user_agent);
        assert_eq!(b',', cfg.input.delimiter);
        assert_eq!(Duration::from_secs(10), cfg.geocoding.timeout);
        assert_eq!(RetryPolicy::default(), cfg.geocoding.retry);
        assert_eq!(12, cfg.report.map.zoom);
        assert_eq!(48.8566, cfg.report.map.center.lat());
    }

    #[test]
    fn fill_missing_values_with_defaults() {
        let raw = parse("[geocoding]\nmax-retries = 1\nretry-backoff = \"1s\"\n");
        let cfg = Config::try_from_raw(raw, None).unwrap();
        assert_eq!(1, cfg.geocoding.retry.max_retries);
        assert_eq!(Duration::from_secs(1), cfg.geocoding.retry.backoff);
        assert_eq!(Duration::from_secs(10), cfg.geocoding.timeout);
        assert_eq!("Non disponible", cfg.input.sentinel);
    }

    #[test]
    fn semicolon_delimiter() {
        let raw = parse("[input]\ndelimiter = \";\"\n");
        let cfg = Config::try_from_raw(raw, None).unwrap();
        assert_eq!(b';', cfg.input.delimiter);
        assert_eq!("Non disponible", cfg.input.sentinel);
    }

    #[test]
    fn reject_non_ascii_delimiter() {
        let raw = parse("[input]\ndelimiter = \"§\"\n");
        assert!(Config::try_from_raw(raw, None).is_err());
    }

    #[test]
    fn opencage_requires_an_api_key() {
        let raw = parse("[geocoding]\ngateway = \"opencage\"\n");
        assert!(Config::try_from_raw(raw, None).is_err());
    }

    #[test]
    fn opencage_api_key_from_env() {
        let raw = parse("[geocoding]\ngateway = \"opencage\"\n");
        let cfg = Config::try_from_raw(raw, Some("secret".into())).unwrap();
        assert_eq!(
            GeocodingGateway::OpenCage {
                api_url: cwm_gateways::opencage::DEFAULT_API_URL.into(),
                api_key: Some("secret".into()),
            },
            cfg.geocoding.gateway
        );
    }

    #[test]
    fn opencage_api_key_from_file() {
        let raw = parse(
            "[geocoding]\ngateway = \"opencage\"\n[gateway.opencage]\napi-key = \"from-file\"\n",
        );
        let cfg = Config::try_from_raw(raw, None).unwrap();
        assert!(matches!(
            cfg.geocoding.gateway,
            GeocodingGateway::OpenCage { api_key: Some(ref key), .. } if key == "from-file"
        ));
    }

    #[test]
    fn reject_invalid_map_center() {
        let raw = parse("[map]\ncenter-lat = 91.0\n");
        assert!(Config::try_from_raw(raw, None).is_err());
    }

    #[test]
    fn reject_zero_timeout() {
        let raw = parse("[geocoding]\ntimeout = \"0s\"\n");
        assert!(Config::try_from_raw(raw, None).is_err());
    }

    #[test]
    fn load_missing_file() {
        let file = Some(Path::new("does-not-exist.toml"));
        assert!(Config::try_load_from_file_or_default(file).is_err());
    }
}
