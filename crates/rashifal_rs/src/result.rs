//! Output payload.
//!
//! Field names and order are a public contract; consumers parse the JSON
//! directly.

use chrono::{DateTime, Utc};
use rashifal_content::SignContent;
use rashifal_ephem::EphemerisSample;
use rashifal_time::{LocalInstant, generated_at};
use rashifal_vedic::CalendarInfo;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::HoroscopeError;
use crate::location::Location;

/// `error` value of the failure payload.
pub const FAILURE_MESSAGE: &str = "Failed to generate horoscope";

/// One day's horoscope for one location.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HoroscopeResult {
    /// `DD/MM/YYYY` in the location's zone.
    pub date: String,
    pub location: Location,
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    pub tithi: u8,
    pub nakshatra: String,
    pub horoscope: SignTable,
    pub meta: Meta,
}

/// Per-sign contents keyed by Bengali sign name, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct SignTable(pub [SignContent; 12]);

impl Serialize for SignTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for content in &self.0 {
            map.serialize_entry(content.rashi.bengali_name(), content)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Meta {
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub engine: String,
}

impl HoroscopeResult {
    /// Compose the payload. `sample` should already be rounded for output.
    pub fn assemble(
        instant: &LocalInstant,
        location: Location,
        sample: EphemerisSample,
        calendar: CalendarInfo,
        signs: [SignContent; 12],
        engine: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            date: instant.display_date(),
            location,
            sun_longitude: sample.sun_longitude,
            moon_longitude: sample.moon_longitude,
            tithi: calendar.tithi,
            nakshatra: calendar.nakshatra_name().to_string(),
            horoscope: SignTable(signs),
            meta: Meta {
                generated_at: generated_at(now),
                engine: engine.to_string(),
            },
        }
    }

    /// Pretty-printed JSON, two-space indent.
    pub fn to_json(&self) -> Result<String, HoroscopeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FailurePayload {
    pub error: &'static str,
    pub details: String,
}

impl FailurePayload {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: FAILURE_MESSAGE,
            details: details.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| format!("{{\"error\": \"{FAILURE_MESSAGE}\"}}"))
    }
}
