//! Integration tests for the analytic Sun/Moon provider.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rashifal_ephem::{AnalyticEphemeris, Body, EphemerisError, EphemerisProvider, sample};

#[test]
fn sun_near_march_equinox() {
    // 2024 March equinox: 2024-03-20 03:06 UTC.
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
    let lon = AnalyticEphemeris.longitude(Body::Sun, t).unwrap();
    let dist = lon.min(360.0 - lon);
    assert!(dist < 0.02, "lon = {lon}");
}

#[test]
fn new_moon_has_small_elongation() {
    // New moon 2024-01-11 11:57 UTC.
    let t = Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap();
    let s = sample(&AnalyticEphemeris, t).unwrap();
    let d = (s.moon_longitude - s.sun_longitude).rem_euclid(360.0);
    let dist = d.min(360.0 - d);
    assert!(dist < 0.3, "elongation = {d}");
}

#[test]
fn full_moon_has_opposite_elongation() {
    // Full moon 2024-01-25 17:54 UTC.
    let t = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    let s = sample(&AnalyticEphemeris, t).unwrap();
    let d = (s.moon_longitude - s.sun_longitude).rem_euclid(360.0);
    assert!((d - 180.0).abs() < 0.3, "elongation = {d}");
}

#[test]
fn moon_moves_about_thirteen_degrees_a_day() {
    let t0 = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
    let a = sample(&AnalyticEphemeris, t0).unwrap();
    let b = sample(&AnalyticEphemeris, t0 + Duration::days(1)).unwrap();
    let step = (b.moon_longitude - a.moon_longitude).rem_euclid(360.0);
    assert!((11.5..15.5).contains(&step), "step = {step}");
}

#[test]
fn epoch_outside_window_is_an_error() {
    let t = Utc.with_ymd_and_hms(1700, 1, 1, 0, 0, 0).unwrap();
    let err = sample(&AnalyticEphemeris, t).unwrap_err();
    assert!(matches!(err, EphemerisError::EpochOutOfRange { .. }));
}

proptest! {
    #[test]
    fn longitudes_always_in_range(secs in 0i64..4_102_444_800i64) {
        let t = Utc.timestamp_opt(secs, 0).unwrap();
        let s = sample(&AnalyticEphemeris, t).unwrap();
        prop_assert!((0.0..360.0).contains(&s.sun_longitude));
        prop_assert!((0.0..360.0).contains(&s.moon_longitude));
        let r = s.rounded();
        prop_assert!((0.0..360.0).contains(&r.sun_longitude));
        prop_assert!((0.0..360.0).contains(&r.moon_longitude));
    }
}
