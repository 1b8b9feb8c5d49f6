//! Lunar and solar fundamental arguments.
//!
//! `t` = Julian centuries of TT since J2000.0. All results in degrees,
//! not normalized (callers take sines).
//!
//! Polynomials from Meeus, *Astronomical Algorithms* (2nd ed.), eqs.
//! 47.1-47.5 and 47.6.

/// Lunar and solar arguments at one epoch, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// L': Moon's mean longitude.
    pub mean_longitude: f64,
    /// D: mean elongation of the Moon from the Sun.
    pub elongation: f64,
    /// M: Sun's mean anomaly.
    pub sun_anomaly: f64,
    /// M': Moon's mean anomaly.
    pub moon_anomaly: f64,
    /// F: Moon's argument of latitude.
    pub latitude_argument: f64,
    /// E: eccentricity correction applied to terms containing M.
    pub eccentricity: f64,
}

/// Compute the lunar fundamental arguments.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    LunarArguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
        eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
    }
}

/// Longitude of the Moon's mean ascending node, in degrees.
pub fn mean_node_longitude(t: f64) -> f64 {
    125.044_52 - 1_934.136_261 * t
}
