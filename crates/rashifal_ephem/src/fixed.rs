//! Constant-longitude provider.

use chrono::{DateTime, Utc};

use crate::{Body, EphemerisError, EphemerisProvider};

/// Returns the same longitudes for every instant.
///
/// Useful for exercising calendar derivation and payload assembly with
/// known inputs (`--sun`/`--moon` on the command line, fixtures in tests).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEphemeris {
    pub sun: f64,
    pub moon: f64,
}

impl FixedEphemeris {
    pub const SOURCE: &'static str = "fixed";

    pub fn new(sun: f64, moon: f64) -> Self {
        Self { sun, moon }
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn longitude(&self, body: Body, _instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        })
    }

    fn source(&self) -> &'static str {
        Self::SOURCE
    }
}
