//! Delta T (TT - UT) for the chart coverage era.
//!
//! Piecewise polynomials of Espenak & Meeus (2006), "Five Millennium Canon
//! of Solar Eclipses", restricted to the segments between 1860 and 2150.
//! Outside that span the nearest segment is extrapolated; the engine never
//! asks for such dates because the coverage window is validated first.

use crate::julian::{DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY};

/// Decimal year of a UT Julian Date.
fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

/// Delta T in seconds at a UT Julian Date.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let y = decimal_year(jd_ut);
    if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// Convert a UT Julian Date to a TT Julian Date.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}
