//! Tithi (lunar day) from the Moon-Sun elongation.

use std::fmt::{Display, Formatter};

use rashifal_ephem::normalize_360;

/// Elongation covered by one tithi: 360/30 = 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn bengali_name(self) -> &'static str {
        match self {
            Self::Shukla => "শুক্ল",
            Self::Krishna => "কৃষ্ণ",
        }
    }
}

impl Display for Paksha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Moon-Sun elongation in [0, 360).
///
/// Computed as `(moon - sun + 360) mod 360`. For longitudes already in
/// [0, 360) the shifted sum is never negative, and its rounding decides
/// which tithi a value one ulp below a 12 deg boundary lands in.
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    let e = (moon_deg - sun_deg + 360.0) % 360.0;
    if e < 0.0 { normalize_360(e) } else { e }
}

/// 1-based tithi number in [1, 30].
pub fn tithi_from_longitudes(sun_deg: f64, moon_deg: f64) -> u8 {
    let idx = (elongation_deg(sun_deg, moon_deg) / TITHI_SEGMENT_DEG).floor() as u8;
    idx.min(29) + 1
}

/// Fortnight for a 1-based tithi.
pub fn paksha_of(tithi: u8) -> Paksha {
    if tithi <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// 1-based day within the fortnight (1-15).
pub fn tithi_in_paksha(tithi: u8) -> u8 {
    if tithi > 15 { tithi - 15 } else { tithi }
}

/// Per-sign tithi label: `"তিথি {n}"`.
pub fn tithi_label(tithi: u8) -> String {
    format!("তিথি {tithi}")
}
