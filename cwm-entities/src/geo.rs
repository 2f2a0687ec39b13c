use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical position in degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) || !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
        {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
