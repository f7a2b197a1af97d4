//! General precession in ecliptic longitude.
//!
//! Carries J2000 ecliptic longitudes (as produced by J2000 orbital
//! elements) forward to the mean equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006), Table 1.

/// Accumulated general precession in longitude since J2000.0, arcseconds.
///
/// `t` = Julian centuries since J2000.0. Positive for later epochs.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Accumulated general precession in longitude since J2000.0, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
