//! TOML configuration.
//!
//! Every section is optional; a missing file section takes its defaults.
//!
//! ```toml
//! [geo]
//! endpoint = "https://ipapi.co/{ip}/json/"
//! timeout_ms = 3000
//! fallback_ip = "8.8.8.8"
//!
//! [defaults]
//! city = "Kolkata"
//! lat = 22.5726
//! lon = 88.3639
//! timeZone = "Asia/Kolkata"
//!
//! [ephemeris]
//! provider = "analytic"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use rashifal_ephem::{AnalyticEphemeris, EphemerisProvider, FixedEphemeris};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::{DEFAULT_CLIENT_IP, DEFAULT_GEO_ENDPOINT, DEFAULT_GEO_TIMEOUT, IpApiResolver};
use crate::location::Location;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RashifalConfig {
    #[serde(default)]
    pub geo: GeoSettings,
    #[serde(default)]
    pub defaults: Location,
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
}

/// Geolocation lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_fallback_ip")]
    pub fallback_ip: String,
}

fn default_endpoint() -> String {
    DEFAULT_GEO_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_GEO_TIMEOUT.as_millis() as u64
}

fn default_fallback_ip() -> String {
    DEFAULT_CLIENT_IP.to_string()
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            fallback_ip: default_fallback_ip(),
        }
    }
}

impl GeoSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn build_resolver(&self) -> Result<IpApiResolver, ConfigError> {
        IpApiResolver::new(self.endpoint.clone(), self.timeout())
            .map_err(|e| ConfigError::Invalid(format!("cannot build HTTP client: {e}")))
    }
}

/// Which ephemeris backs the computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Analytic,
    Fixed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Sun longitude for the `fixed` provider.
    #[serde(default)]
    pub sun: Option<f64>,
    /// Moon longitude for the `fixed` provider.
    #[serde(default)]
    pub moon: Option<f64>,
}

impl EphemerisSettings {
    pub fn build_provider(&self) -> Result<Box<dyn EphemerisProvider>, ConfigError> {
        match self.provider {
            ProviderKind::Analytic => Ok(Box::new(AnalyticEphemeris::new())),
            ProviderKind::Fixed => match (self.sun, self.moon) {
                (Some(sun), Some(moon)) => Ok(Box::new(FixedEphemeris::new(sun, moon))),
                _ => Err(ConfigError::Invalid(
                    "fixed ephemeris requires both sun and moon".into(),
                )),
            },
        }
    }
}

impl RashifalConfig {
    /// Load from a TOML file and validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.geo.endpoint.contains("{ip}") {
            return Err(ConfigError::Invalid(
                "geo.endpoint must contain the {ip} placeholder".into(),
            ));
        }
        if self.geo.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "geo.timeout_ms must be greater than zero".into(),
            ));
        }
        if self.geo.fallback_ip.trim().is_empty() {
            return Err(ConfigError::Invalid("geo.fallback_ip must not be empty".into()));
        }
        self.defaults
            .validate()
            .map_err(|msg| ConfigError::Invalid(format!("defaults: {msg}")))?;
        rashifal_time::resolve_zone(&self.defaults.time_zone)
            .map_err(|e| ConfigError::Invalid(format!("defaults: {e}")))?;
        if self.ephemeris.provider == ProviderKind::Fixed {
            let finite = |v: Option<f64>| v.is_some_and(f64::is_finite);
            if !finite(self.ephemeris.sun) || !finite(self.ephemeris.moon) {
                return Err(ConfigError::Invalid(
                    "fixed ephemeris requires finite sun and moon".into(),
                ));
            }
        }
        Ok(())
    }
}
