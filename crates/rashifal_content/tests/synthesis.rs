//! Integration tests for per-sign content synthesis.

use proptest::prelude::*;
use rashifal_content::{ADVICE, HEALTH, LEAD, synthesize_all};
use rashifal_ephem::EphemerisSample;
use rashifal_vedic::derive_calendar;

// (lead, health, advice) indices for 2024-01-01 / Kolkata, canonical order.
const KOLKATA_2024_01_01: [(usize, usize, usize); 12] = [
    (1, 1, 1),
    (2, 0, 2),
    (1, 1, 0),
    (1, 2, 1),
    (2, 3, 3),
    (1, 2, 0),
    (3, 2, 3),
    (3, 0, 2),
    (4, 1, 2),
    (1, 1, 1),
    (2, 1, 3),
    (2, 0, 2),
];

#[test]
fn known_picks_for_kolkata() {
    // Moon in Anuradha: no flavor sentence, so summary == lead.
    let cal = derive_calendar(&EphemerisSample::new(100.0, 220.0));
    let all = synthesize_all("2024-01-01", "Kolkata", &cal);
    for (content, (lead, health, advice)) in all.iter().zip(KOLKATA_2024_01_01) {
        assert_eq!(content.summary, LEAD[lead], "{}", content.rashi.name());
        assert_eq!(content.health, HEALTH[health], "{}", content.rashi.name());
        assert_eq!(content.advice, ADVICE[advice], "{}", content.rashi.name());
    }
}

#[test]
fn city_changes_the_seed() {
    let cal = derive_calendar(&EphemerisSample::new(100.0, 220.0));
    let kolkata = synthesize_all("2024-01-01", "Kolkata", &cal);
    let london = synthesize_all("2024-01-01", "London", &cal);
    // Mesha: Kolkata picks advice 1, London picks advice 2.
    assert_eq!(kolkata[0].advice, ADVICE[1]);
    assert_eq!(london[0].advice, ADVICE[2]);
}

#[test]
fn serialized_fields() {
    let cal = derive_calendar(&EphemerisSample::new(100.0, 220.0));
    let all = synthesize_all("2024-01-01", "Kolkata", &cal);
    let v = serde_json::to_value(&all[0]).unwrap();
    let obj = v.as_object().unwrap();
    let keys: Vec<_> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    for k in ["summary", "health", "advice", "tithi", "nakshatra"] {
        assert!(obj.contains_key(k), "missing {k}");
    }
}

proptest! {
    #[test]
    fn same_inputs_same_bytes(
        day in 1u32..=28,
        city in "[A-Za-z ]{0,16}",
        sun in 0.0f64..360.0,
        moon in 0.0f64..360.0,
    ) {
        let date_key = format!("2025-02-{day:02}");
        let cal = derive_calendar(&EphemerisSample::new(sun, moon));
        let a = synthesize_all(&date_key, &city, &cal);
        let b = synthesize_all(&date_key, &city, &cal);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn picks_always_from_pools(seed_city in ".{0,24}") {
        let cal = derive_calendar(&EphemerisSample::new(0.0, 0.0));
        for c in synthesize_all("2024-01-01", &seed_city, &cal) {
            prop_assert!(LEAD.iter().any(|l| c.summary.starts_with(l)));
            prop_assert!(HEALTH.contains(&c.health.as_str()));
            prop_assert!(ADVICE.contains(&c.advice.as_str()));
        }
    }
}
