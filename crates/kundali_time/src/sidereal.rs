//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! GMST polynomial: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4,
//! with every coefficient divided by 15 so the series yields hours
//! directly. The input is a UT Julian Date; UTC is used for UT1 (the
//! difference is under a second and below the resolution of a chart).

use crate::angle::wrap;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in hours, range `[0, 24)`.
pub fn gmst_hours(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let hours = 18.697_374_558 + 24.065_709_824_419_08 * d + 0.000_025_862 * t * t
        - t * t * t / 580_650_000.0;
    wrap(hours, 24.0)
}

/// Greenwich Mean Sidereal Time in degrees, range `[0, 360)`.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    wrap(gmst_hours(jd_ut) * 15.0, 360.0)
}

/// Local Sidereal Time in degrees from GMST and east longitude.
///
/// Always non-negative: west longitudes wrap around through 360.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    wrap(gmst_deg + longitude_east_deg, 360.0)
}

/// Degrees of sidereal time to hours.
pub fn degrees_to_hours(deg: f64) -> f64 {
    wrap(deg / 15.0, 24.0)
}
