//! Integration tests for timezone resolution and date keys.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rashifal_time::{DEFAULT_TIME_ZONE, LocalInstant};

#[test]
fn date_key_follows_local_day_not_utc_day() {
    // 20:00 UTC on Jan 1 is already Jan 2 in Kolkata (+05:30).
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();

    let kolkata = LocalInstant::resolve("Asia/Kolkata", now);
    assert_eq!(kolkata.date_key(), "2024-01-02");
    assert_eq!(kolkata.display_date(), "02/01/2024");

    let new_york = LocalInstant::resolve("America/New_York", now);
    assert_eq!(new_york.date_key(), "2024-01-01");
}

#[test]
fn invalid_zone_matches_default_zone_exactly() {
    let now = Utc.with_ymd_and_hms(2024, 6, 30, 19, 45, 0).unwrap();
    let fallback = LocalInstant::resolve("Invalid/Zone", now);
    let default = LocalInstant::in_zone(DEFAULT_TIME_ZONE, now);
    assert_eq!(fallback.date_key(), default.date_key());
    assert_eq!(fallback.display_date(), default.display_date());
}

#[test]
fn fallback_is_stable_across_calls() {
    let now = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap();
    let a = LocalInstant::resolve("???", now);
    let b = LocalInstant::resolve("???", now);
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn date_key_and_display_describe_same_day(secs in 0i64..4_102_444_800i64) {
        let now = Utc.timestamp_opt(secs, 0).unwrap();
        let inst = LocalInstant::resolve("Asia/Kolkata", now);
        let key = NaiveDate::parse_from_str(&inst.date_key(), "%Y-%m-%d").unwrap();
        let shown = NaiveDate::parse_from_str(&inst.display_date(), "%d/%m/%Y").unwrap();
        prop_assert_eq!(key, shown);
        prop_assert_eq!(inst.utc(), now);
    }
}
