//! Error types for horoscope computation.

use rashifal_ephem::EphemerisError;
use thiserror::Error;

/// Fatal errors for one horoscope computation.
///
/// Geolocation and timezone problems are not here: both degrade to the
/// default location or zone and never abort a request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HoroscopeError {
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("{0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for HoroscopeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(format!("serialization failed: {e}"))
    }
}

/// Errors loading or validating a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_failure_is_unexpected() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = HoroscopeError::from(json_err);
        assert!(matches!(err, HoroscopeError::Unexpected(_)));
        assert!(err.to_string().starts_with("serialization failed: "), "{err}");
    }

    #[test]
    fn ephemeris_errors_convert() {
        let err = HoroscopeError::from(EphemerisError::EpochOutOfRange { jd: 0.0 });
        assert!(matches!(err, HoroscopeError::EphemerisUnavailable(_)));
    }
}
