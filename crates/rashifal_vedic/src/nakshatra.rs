//! Nakshatra (lunar mansion) lookup, 27-fold uniform scheme.
//!
//! The ecliptic is split into 27 equal mansions of 13 deg 20' starting at
//! 0 deg. Longitudes are taken as-is: no ayanamsha is applied.

use rashifal_ephem::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name (transliterated).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Bengali name, as written into the payload.
    pub const fn bengali_name(self) -> &'static str {
        match self {
            Self::Ashwini => "অশ্বিনী",
            Self::Bharani => "ভরণী",
            Self::Krittika => "কৃত্তিকা",
            Self::Rohini => "রোহিণী",
            Self::Mrigashira => "মৃগশিরা",
            Self::Ardra => "আর্দ্রা",
            Self::Punarvasu => "পুনর্বসু",
            Self::Pushya => "পুষ্যা",
            Self::Ashlesha => "অশ্লেষা",
            Self::Magha => "মঘা",
            Self::PurvaPhalguni => "পূর্বফাল্গুনী",
            Self::UttaraPhalguni => "উত্তরফাল্গুনী",
            Self::Hasta => "হস্তা",
            Self::Chitra => "চিত্রা",
            Self::Swati => "স্বাতী",
            Self::Vishakha => "বিশাখা",
            Self::Anuradha => "অনুরাধা",
            Self::Jyeshtha => "জ্যেষ্ঠা",
            Self::Mula => "মূলা",
            Self::PurvaAshadha => "পূর্বাষাঢ়া",
            Self::UttaraAshadha => "উত্তরাষাঢ়া",
            Self::Shravana => "শ্রবণা",
            Self::Dhanishtha => "ধনিষ্ঠা",
            Self::Shatabhisha => "শতভিষা",
            Self::PurvaBhadrapada => "পূর্বভাদ্রপদা",
            Self::UttaraBhadrapada => "উত্তরভাদ্রপদা",
            Self::Revati => "রেবতী",
        }
    }

    /// Short flavor sentence appended to each sign's summary.
    ///
    /// Only Ashwini through Magha carry one.
    pub const fn flavor(self) -> Option<&'static str> {
        match self {
            Self::Ashwini => Some("শুরু করার শক্তি ও উদ্যম বৃদ্ধি পাবে।"),
            Self::Bharani => Some("সৃজনশীলতা ও সহমর্মিতা জাগ্রত হবে।"),
            Self::Krittika => Some("পরিশ্রমের ফল মিলবে।"),
            Self::Rohini => Some("পারিবারিক সম্পর্ক মজবুত হবে।"),
            Self::Mrigashira => Some("নতুন চিন্তা ও কৌতূহল বৃদ্ধি পাবে।"),
            Self::Ardra => Some("আবেগ নিয়ন্ত্রণে রাখুন।"),
            Self::Punarvasu => Some("নতুন সূচনার জন্য শুভ দিন।"),
            Self::Pushya => Some("সহযোগিতা ও সফলতা মিলবে।"),
            Self::Ashlesha => Some("সম্পর্কে সতর্ক থাকুন।"),
            Self::Magha => Some("সম্মান ও স্বীকৃতি পাওয়ার সম্ভাবনা।"),
            _ => None,
        }
    }

    /// [`flavor`](Self::flavor), or `""` when the nakshatra has none.
    pub const fn flavor_text(self) -> &'static str {
        match self.flavor() {
            Some(s) => s,
            None => "",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Degrees within the nakshatra, [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra containing an ecliptic longitude.
///
/// Index is clamped to 26 so a longitude a hair below 360 never overflows
/// the table.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[usize::from(idx)],
        nakshatra_index: idx,
        degrees_in_nakshatra: lon - f64::from(idx) * NAKSHATRA_SPAN_27,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn exactly_ten_flavors() {
        let with_flavor = ALL_NAKSHATRAS_27
            .iter()
            .filter(|n| n.flavor().is_some())
            .count();
        assert_eq!(with_flavor, 10);
        assert_eq!(Nakshatra::Magha.flavor_text(), "সম্মান ও স্বীকৃতি পাওয়ার সম্ভাবনা।");
        assert_eq!(Nakshatra::PurvaPhalguni.flavor_text(), "");
        assert_eq!(Nakshatra::Revati.flavor_text(), "");
    }

    #[test]
    fn boundaries() {
        assert_eq!(nakshatra_from_longitude(0.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(13.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(13.34).nakshatra, Nakshatra::Bharani);
        assert_eq!(nakshatra_from_longitude(359.999_999).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn moon_at_220_is_anuradha() {
        let info = nakshatra_from_longitude(220.0);
        assert_eq!(info.nakshatra_index, 16);
        assert_eq!(info.nakshatra.bengali_name(), "অনুরাধা");
        assert!((info.degrees_in_nakshatra - (220.0 - 16.0 * NAKSHATRA_SPAN_27)).abs() < 1e-12);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }
}
