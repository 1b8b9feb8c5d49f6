//! Where a horoscope is computed for.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LATITUDE: f64 = 22.5726;
pub const DEFAULT_LONGITUDE: f64 = 88.3639;
pub const DEFAULT_CITY: &str = "Kolkata";
pub const DEFAULT_REGION: &str = "West Bengal";
pub const DEFAULT_COUNTRY: &str = "India";

/// A fully populated location. Field order is the payload order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            region: DEFAULT_REGION.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            lat: DEFAULT_LATITUDE,
            lon: DEFAULT_LONGITUDE,
            time_zone: rashifal_time::DEFAULT_TIME_ZONE_NAME.to_string(),
        }
    }
}

impl Location {
    /// Check coordinate ranges and that the city is non-empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err("lat must be within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err("lon must be within [-180, 180]");
        }
        if self.city.trim().is_empty() {
            return Err("city must not be empty");
        }
        Ok(())
    }
}
