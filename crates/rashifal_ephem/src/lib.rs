//! Ephemeris contract consumed by the rashifal pipeline.
//!
//! The pipeline only needs the apparent geocentric ecliptic longitude of the
//! Sun and the Moon at an instant. [`EphemerisProvider`] is the seam: any
//! astronomical library can sit behind it. This crate ships two providers:
//! - [`AnalyticEphemeris`]: truncated solar/lunar series (Meeus), ~0.01 deg
//! - [`FixedEphemeris`]: constant longitudes, for tests and manual checks

pub mod analytic;
pub mod error;
pub mod fixed;
pub mod fundamental;
pub mod nutation;

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

pub use analytic::{AnalyticEphemeris, moon_apparent_longitude_deg, sun_apparent_longitude_deg};
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;

/// Bodies the pipeline asks an ephemeris for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of ecliptic longitudes.
///
/// Implementations may return any real number; callers normalize into
/// [0, 360) with [`normalize_360`].
pub trait EphemerisProvider: Send + Sync {
    /// Apparent geocentric ecliptic longitude of `body` in degrees.
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Short identifier reported in payload metadata.
    fn source(&self) -> &'static str;
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-20 % 360 + 360 rounds to 360.0 in f64.
    // Adding +0.0 turns a -0.0 remainder into +0.0.
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Round to 6 decimal digits, keeping the result in [0, 360).
pub fn round_longitude(deg: f64) -> f64 {
    let r = (deg * 1e6).round() / 1e6;
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Sun and Moon longitudes at one instant, normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    pub sun_longitude: f64,
    pub moon_longitude: f64,
}

impl EphemerisSample {
    /// Build a sample from raw longitudes, normalizing both.
    pub fn new(sun_longitude: f64, moon_longitude: f64) -> Self {
        Self {
            sun_longitude: normalize_360(sun_longitude),
            moon_longitude: normalize_360(moon_longitude),
        }
    }

    /// Output copy rounded to 6 decimals. Derivations use the unrounded sample.
    pub fn rounded(&self) -> Self {
        Self {
            sun_longitude: round_longitude(self.sun_longitude),
            moon_longitude: round_longitude(self.moon_longitude),
        }
    }
}

/// Query both bodies and normalize.
pub fn sample<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
) -> Result<EphemerisSample, EphemerisError> {
    let sun = checked_longitude(provider, Body::Sun, instant)?;
    let moon = checked_longitude(provider, Body::Moon, instant)?;
    Ok(EphemerisSample::new(sun, moon))
}

fn checked_longitude<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    instant: DateTime<Utc>,
) -> Result<f64, EphemerisError> {
    let value = provider.longitude(body, instant)?;
    if !value.is_finite() {
        return Err(EphemerisError::NonFinite { body, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn normalize_clears_negative_zero() {
        for deg in [-0.0, -360.0, -720.0] {
            let r = normalize_360(deg);
            assert_eq!(r, 0.0);
            assert!(r.is_sign_positive(), "{deg} -> {r}");
        }
    }

    #[test]
    fn rounding_clears_negative_zero() {
        assert!(round_longitude(-0.0).is_sign_positive());
        assert!(round_longitude(-1e-9).is_sign_positive());
    }

    #[test]
    fn rounding_six_digits() {
        assert_eq!(round_longitude(100.123_456_789), 100.123_457);
    }

    #[test]
    fn rounding_never_reaches_360() {
        assert_eq!(round_longitude(359.999_999_9), 0.0);
    }

    #[test]
    fn sample_normalizes_inputs() {
        let s = EphemerisSample::new(-20.0, 380.0);
        assert!((s.sun_longitude - 340.0).abs() < 1e-12);
        assert!((s.moon_longitude - 20.0).abs() < 1e-12);
    }

    struct NanMoon;

    impl EphemerisProvider for NanMoon {
        fn longitude(&self, body: Body, _: DateTime<Utc>) -> Result<f64, EphemerisError> {
            match body {
                Body::Sun => Ok(10.0),
                Body::Moon => Ok(f64::NAN),
            }
        }

        fn source(&self) -> &'static str {
            "nan"
        }
    }

    #[test]
    fn sample_rejects_non_finite() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let err = sample(&NanMoon, t).unwrap_err();
        assert!(matches!(err, EphemerisError::NonFinite { body: Body::Moon, .. }));
    }

    #[test]
    fn body_display() {
        assert_eq!(Body::Moon.to_string(), "Moon");
    }
}
