//! Time handling for the rashifal pipeline.
//!
//! This crate provides:
//! - Timezone resolution with a silent fallback to the default zone
//! - [`LocalInstant`], carrying the canonical date key used for seeding
//! - Julian Dates of UTC timestamps
//! - A polynomial ΔT (TT − UT) approximation for ephemeris input

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod local;

pub use delta_t::{decimal_year, delta_t_seconds, jd_utc_to_jd_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries, utc_to_jd,
};
pub use local::{
    DEFAULT_TIME_ZONE, DEFAULT_TIME_ZONE_NAME, LocalInstant, generated_at, resolve_zone,
};

// Re-export so downstream crates can name zones without depending on chrono-tz.
pub use chrono_tz::Tz;
