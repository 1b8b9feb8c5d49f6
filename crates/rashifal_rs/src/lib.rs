//! Daily Bengali rashifal.
//!
//! Given a client IP (or an explicit location) and an instant, produce a
//! horoscope for all twelve signs: the lunar day (tithi) and mansion
//! (nakshatra) from real Sun/Moon longitudes, plus per-sign text that is
//! stable for a given local date and city.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rashifal_rs::*;
//!
//! let result = compute_horoscope(Location::default(), &AnalyticEphemeris, chrono::Utc::now())?;
//! println!("{}", result.to_json()?);
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod location;
pub mod pipeline;
pub mod result;

pub use config::{EphemerisSettings, GeoSettings, ProviderKind, RashifalConfig};
pub use error::{ConfigError, HoroscopeError};
pub use geo::{
    DEFAULT_CLIENT_IP, DEFAULT_GEO_ENDPOINT, GeoError, GeoRecord, GeoResolver, IpApiResolver,
    client_ip_from_forwarded, first_forwarded_ip, resolve_location,
};
pub use location::Location;
pub use pipeline::{compute_horoscope, horoscope_for_ip, horoscope_for_ip_with_defaults};
pub use result::{FAILURE_MESSAGE, FailurePayload, HoroscopeResult, Meta, SignTable};

// Re-export the building blocks so callers only need this crate.
pub use rashifal_content::{SeededSequence, SignContent};
pub use rashifal_ephem::{
    AnalyticEphemeris, Body, EphemerisError, EphemerisProvider, EphemerisSample, FixedEphemeris,
};
pub use rashifal_time::LocalInstant;
pub use rashifal_vedic::{CalendarInfo, Nakshatra, Paksha, Rashi, derive_calendar};
