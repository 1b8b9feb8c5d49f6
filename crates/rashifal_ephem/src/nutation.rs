//! Nutation in longitude, four-term approximation.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 22: accurate to
//! 0.5" which is well below the precision of the truncated series it
//! corrects.

use crate::fundamental::mean_node_longitude;

/// Arcseconds per degree.
const ARCSEC_PER_DEG: f64 = 3600.0;

// Each row: [amplitude (arcsec), coefficient of Ω, of 2L_sun, of 2L_moon]
#[rustfmt::skip]
static TERMS: [[f64; 4]; 4] = [
    //  amp     Ω     2L☉   2L☾
    [-17.20,  1.0,  0.0,  0.0],
    [ -1.32,  0.0,  1.0,  0.0],
    [ -0.23,  0.0,  0.0,  1.0],
    [  0.21,  2.0,  0.0,  0.0],
];

/// Nutation in longitude Δψ in degrees. `t` = Julian centuries TT since J2000.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = mean_node_longitude(t);
    let sun_mean = 280.4665 + 36_000.7698 * t;
    let moon_mean = 218.3165 + 481_267.8813 * t;

    let mut dpsi = 0.0_f64;
    for term in &TERMS {
        let angle = term[1] * omega + term[2] * 2.0 * sun_mean + term[3] * 2.0 * moon_mean;
        dpsi += term[0] * angle.to_radians().sin();
    }
    dpsi / ARCSEC_PER_DEG
}
