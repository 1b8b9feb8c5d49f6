//! Rashi (zodiac sign) names and lookup.
//!
//! Twelve equal signs of 30 deg from Mesha at 0 deg. The Bengali names are
//! the keys of the per-sign horoscope map and feed the content seeds, so
//! their spelling is load-bearing.

use rashifal_ephem::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in canonical order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Bengali name.
    pub const fn bengali_name(self) -> &'static str {
        match self {
            Self::Mesha => "মেষ",
            Self::Vrishabha => "বৃষ",
            Self::Mithuna => "মিথুন",
            Self::Karka => "কর্কট",
            Self::Simha => "সিংহ",
            Self::Kanya => "কন্যা",
            Self::Tula => "তুলা",
            Self::Vrischika => "বৃশ্চিক",
            Self::Dhanu => "ধনু",
            Self::Makara => "মকর",
            Self::Kumbha => "কুম্ভ",
            Self::Meena => "মীন",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Match any of the Sanskrit, English or Bengali names (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_RASHIS.iter().copied().find(|r| {
            r.name().eq_ignore_ascii_case(name)
                || r.western_name().eq_ignore_ascii_case(name)
                || r.bengali_name() == name
        })
    }
}

/// Rashi containing an ecliptic longitude.
pub fn rashi_from_longitude(lon_deg: f64) -> Rashi {
    let idx = ((normalize_360(lon_deg) / RASHI_SPAN).floor() as usize).min(11);
    ALL_RASHIS[idx]
}
