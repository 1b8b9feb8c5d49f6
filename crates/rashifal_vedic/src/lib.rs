//! Lunar calendar derivation for the daily rashifal.
//!
//! Everything here is pure arithmetic on two ecliptic longitudes:
//! - tithi from the Moon-Sun elongation (30 segments of 12 deg)
//! - nakshatra from the Moon's longitude (27 segments of 13 deg 20')
//! - rashi names in canonical order with Bengali spellings
//!
//! Longitudes are used as delivered by the ephemeris (tropical); no
//! ayanamsha correction is applied.

pub mod calendar;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;

pub use calendar::{CalendarInfo, derive_calendar};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, rashi_from_longitude};
pub use tithi::{
    Paksha, TITHI_SEGMENT_DEG, elongation_deg, paksha_of, tithi_from_longitudes, tithi_in_paksha,
    tithi_label,
};
