use cwm_entities::geo::MapPoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoCodingError {
    #[error("The geocoding request timed out")]
    TimedOut,
    #[error("The geocoding service is unavailable: {0}")]
    Unavailable(String),
    #[error("The geocoding service failed: {0}")]
    Service(String),
}

impl GeoCodingError {
    /// Transient failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TimedOut | Self::Unavailable(_))
    }
}

pub trait GeoCodingGateway {
    /// Look up the position of a free-text address.
    ///
    /// Returns `Ok(None)` if the service answered but did not
    /// find any match.
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError>;
}
