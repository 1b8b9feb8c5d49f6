//! ΔT = TT − UT approximation.
//!
//! Piecewise polynomials from Espenak & Meeus, *Five Millennium Canon of
//! Solar Eclipses* (NASA/TP-2006-214141), restricted to the modern ranges
//! plus the long-term parabola outside them. Accuracy is a few seconds over
//! 1961-2050, which moves the Moon by about 0.001 deg.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Mean length of a Julian year in days.
const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal year of a Julian Date (2000.0 at J2000).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a UTC Julian Date to a TT Julian Date.
pub fn jd_utc_to_jd_tt(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(decimal_year(jd_utc)) / SECONDS_PER_DAY
}
