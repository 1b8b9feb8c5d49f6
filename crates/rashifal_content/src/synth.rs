//! Per-sign horoscope text.

use rashifal_vedic::{ALL_RASHIS, CalendarInfo, Rashi};
use serde::Serialize;

use crate::seeded::SeededSequence;
use crate::templates::{ADVICE, HEALTH, LEAD};

/// Generated text for one sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignContent {
    #[serde(skip)]
    pub rashi: Rashi,
    pub summary: String,
    pub health: String,
    pub advice: String,
    pub tithi: String,
    pub nakshatra: String,
}

/// Seed string for one sign: `"{date_key}|{bengali sign}|{city}"`.
pub fn sign_seed(date_key: &str, rashi: Rashi, city: &str) -> String {
    format!("{date_key}|{}|{city}", rashi.bengali_name())
}

/// Text for one sign.
///
/// Draw order is fixed (lead, health, advice); reordering would change
/// every output.
pub fn synthesize_sign(
    date_key: &str,
    rashi: Rashi,
    city: &str,
    calendar: &CalendarInfo,
) -> SignContent {
    let mut seq = SeededSequence::new(&sign_seed(date_key, rashi, city));
    let lead = seq.pick(&LEAD).copied().unwrap_or_default();
    let health = seq.pick(&HEALTH).copied().unwrap_or_default();
    let advice = seq.pick(&ADVICE).copied().unwrap_or_default();

    SignContent {
        rashi,
        summary: format!("{lead} {}", calendar.flavor()).trim().to_string(),
        health: health.to_string(),
        advice: advice.to_string(),
        tithi: calendar.tithi_label(),
        nakshatra: calendar.nakshatra_name().to_string(),
    }
}

/// Text for all twelve signs in canonical order.
pub fn synthesize_all(date_key: &str, city: &str, calendar: &CalendarInfo) -> [SignContent; 12] {
    tracing::debug!(date_key, city, tithi = calendar.tithi, "synthesizing sign content");
    ALL_RASHIS.map(|rashi| synthesize_sign(date_key, rashi, city, calendar))
}
