//! Localized instants and the canonical date key.
//!
//! The date key feeds the seed of every per-sign sequence, so resolution
//! never fails: an unknown zone falls back to [`DEFAULT_TIME_ZONE`].

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::TimeError;

/// Zone used when the caller's zone is missing or unrecognized.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Kolkata;

/// IANA name of [`DEFAULT_TIME_ZONE`].
pub const DEFAULT_TIME_ZONE_NAME: &str = "Asia/Kolkata";

/// Parse an IANA timezone identifier.
pub fn resolve_zone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimeZone(name.to_string()))
}

/// A UTC instant viewed in a specific timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInstant {
    local: DateTime<Tz>,
}

impl LocalInstant {
    /// Localize `now` into the named zone, falling back to the default zone.
    pub fn resolve(tz_name: &str, now: DateTime<Utc>) -> Self {
        let zone = match resolve_zone(tz_name) {
            Ok(zone) => zone,
            Err(e) => {
                warn!(error = %e, fallback = DEFAULT_TIME_ZONE_NAME, "using default time zone");
                DEFAULT_TIME_ZONE
            }
        };
        Self::in_zone(zone, now)
    }

    pub fn in_zone(zone: Tz, now: DateTime<Utc>) -> Self {
        Self {
            local: now.with_timezone(&zone),
        }
    }

    /// Zone actually used (after any fallback).
    pub fn zone(&self) -> Tz {
        self.local.timezone()
    }

    pub fn zone_name(&self) -> &'static str {
        self.zone().name()
    }

    /// Canonical `YYYY-MM-DD` key of the local calendar day.
    pub fn date_key(&self) -> String {
        self.local.format("%Y-%m-%d").to_string()
    }

    /// Local calendar day formatted as `DD/MM/YYYY`.
    pub fn display_date(&self) -> String {
        self.local.format("%d/%m/%Y").to_string()
    }

    /// Underlying UTC timestamp.
    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }
}

/// Payload timestamp: RFC 3339, UTC, millisecond precision, `Z` suffix.
pub fn generated_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn resolve_known_zone() {
        assert_eq!(resolve_zone("Europe/London"), Ok(chrono_tz::Europe::London));
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(resolve_zone(" Asia/Tokyo "), Ok(chrono_tz::Asia::Tokyo));
    }

    #[test]
    fn resolve_unknown_zone_errors() {
        assert_eq!(
            resolve_zone("Mars/Olympus_Mons"),
            Err(TimeError::InvalidTimeZone("Mars/Olympus_Mons".into()))
        );
    }

    #[test]
    fn invalid_zone_falls_back() {
        let inst = LocalInstant::resolve("not a zone", noon_utc());
        assert_eq!(inst.zone(), DEFAULT_TIME_ZONE);
        assert_eq!(inst.zone_name(), DEFAULT_TIME_ZONE_NAME);
    }

    #[test]
    fn empty_zone_falls_back() {
        let inst = LocalInstant::resolve("", noon_utc());
        assert_eq!(inst.zone(), DEFAULT_TIME_ZONE);
    }

    #[test]
    fn formats() {
        let inst = LocalInstant::resolve("Asia/Kolkata", noon_utc());
        assert_eq!(inst.date_key(), "2024-01-01");
        assert_eq!(inst.display_date(), "01/01/2024");
    }

    #[test]
    fn utc_is_preserved() {
        let inst = LocalInstant::resolve("America/New_York", noon_utc());
        assert_eq!(inst.utc(), noon_utc());
    }

    #[test]
    fn generated_at_millis() {
        let t = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        assert_eq!(generated_at(t), "2024-05-06T07:08:09.000Z");
    }
}
