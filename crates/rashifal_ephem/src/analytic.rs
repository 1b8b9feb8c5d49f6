//! Truncated analytic theories of the Sun and the Moon.
//!
//! Sun: geometric longitude from the mean longitude and the equation of
//! center, then aberration and nutation (Meeus ch. 25, low accuracy,
//! ~0.01 deg).
//!
//! Moon: mean longitude plus the 34 largest periodic terms of Meeus
//! Table 47.A and the three additive terms (A1, A2, L'-F), then nutation.
//! Residual error against the full ELP-2000/82 table is ~0.01 deg, which
//! moves a tithi or nakshatra boundary by well under a minute.

use chrono::{DateTime, Utc};
use rashifal_time::{jd_to_centuries, jd_utc_to_jd_tt, utc_to_jd};

use crate::fundamental::lunar_arguments;
use crate::nutation::nutation_longitude_deg;
use crate::{Body, EphemerisError, EphemerisProvider, normalize_360};

/// Validity window of the truncated series, in Julian centuries from J2000.
const MAX_ABS_CENTURIES: f64 = 2.0;

/// Moon longitude terms from Meeus Table 47.A.
///
/// Each row: `[nD, nM, nM', nF, amplitude]` with amplitude in 1e-6 deg.
/// Terms with |nM| > 0 are scaled by E^|nM|.
#[rustfmt::skip]
static MOON_LONGITUDE_TERMS: [[f64; 5]; 34] = [
    //  D     M     M'    F     amplitude
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -7_793.0],
    [ 1.0,  0.0, -1.0,  0.0,     -6_766.0],
    [ 1.0,  1.0,  0.0,  0.0,      5_162.0],
    [ 2.0, -1.0,  1.0,  0.0,      5_000.0],
    [ 2.0,  0.0,  2.0,  0.0,      4_049.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_996.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_861.0],
    [ 0.0,  1.0, -2.0,  0.0,      3_665.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_689.0],
    [ 2.0, -1.0, -2.0,  0.0,     -2_602.0],
    [ 1.0,  0.0,  1.0,  0.0,      2_390.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0],
];

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mean_anomaly = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();

    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * mean_anomaly.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000_289 * (3.0 * mean_anomaly).sin();

    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(mean_longitude + center - 0.005_69 - 0.004_78 * omega.sin())
}

/// Apparent geocentric ecliptic longitude of the Moon, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);

    let mut sigma = 0.0_f64;
    for term in &MOON_LONGITUDE_TERMS {
        let angle = term[0] * args.elongation
            + term[1] * args.sun_anomaly
            + term[2] * args.moon_anomaly
            + term[3] * args.latitude_argument;
        let e_factor = args.eccentricity.powi(term[1].abs() as i32);
        sigma += term[4] * e_factor * angle.to_radians().sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma += 3_958.0 * a1.sin()
        + 1_962.0 * (args.mean_longitude - args.latitude_argument).to_radians().sin()
        + 318.0 * a2.sin();

    normalize_360(args.mean_longitude + sigma / 1e6 + nutation_longitude_deg(t))
}

/// Ephemeris backed by the truncated analytic series in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const SOURCE: &'static str = "meeus-analytic";

    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd_tt = jd_utc_to_jd_tt(utc_to_jd(instant));
        if !jd_tt.is_finite() {
            return Err(EphemerisError::Unavailable {
                body,
                reason: "epoch is not finite".into(),
            });
        }
        let t = jd_to_centuries(jd_tt);
        if t.abs() > MAX_ABS_CENTURIES {
            return Err(EphemerisError::EpochOutOfRange { jd: jd_tt });
        }
        Ok(match body {
            Body::Sun => sun_apparent_longitude_deg(t),
            Body::Moon => moon_apparent_longitude_deg(t),
        })
    }

    fn source(&self) -> &'static str {
        Self::SOURCE
    }
}
