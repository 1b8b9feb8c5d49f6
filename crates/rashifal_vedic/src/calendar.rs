//! Calendar facts derived from one Sun/Moon sample.

use rashifal_ephem::EphemerisSample;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::tithi::{Paksha, paksha_of, tithi_from_longitudes, tithi_label};

/// Tithi and nakshatra for a sample, plus the fortnight and Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarInfo {
    /// 1-based tithi, 1..=30.
    pub tithi: u8,
    pub paksha: Paksha,
    pub nakshatra: Nakshatra,
    pub moon_rashi: Rashi,
}

impl CalendarInfo {
    pub fn nakshatra_index(&self) -> u8 {
        self.nakshatra.index()
    }

    /// Bengali nakshatra name as written into the payload.
    pub fn nakshatra_name(&self) -> &'static str {
        self.nakshatra.bengali_name()
    }

    /// Flavor sentence for the nakshatra, `""` when none.
    pub fn flavor(&self) -> &'static str {
        self.nakshatra.flavor_text()
    }

    pub fn tithi_label(&self) -> String {
        tithi_label(self.tithi)
    }
}

/// Derive calendar facts. Uses the unrounded longitudes.
pub fn derive_calendar(sample: &EphemerisSample) -> CalendarInfo {
    let tithi = tithi_from_longitudes(sample.sun_longitude, sample.moon_longitude);
    CalendarInfo {
        tithi,
        paksha: paksha_of(tithi),
        nakshatra: nakshatra_from_longitude(sample.moon_longitude).nakshatra,
        moon_rashi: rashi_from_longitude(sample.moon_longitude),
    }
}
