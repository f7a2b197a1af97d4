//! Fundamental arguments and the short nutation series.
//!
//! Delaunay arguments: IERS Conventions 2010, Table 5.2e.
//! Nutation: the four dominant terms of the IAU 1980 series as given by
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22 (accuracy 0.5"
//! in longitude, 0.1" in obliquity).

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// Returns `[l, l', F, D, Omega]`:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Omega` = mean longitude of the ascending node of the Moon
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Mean longitudes of the Sun and Moon in radians, `(L, L')`.
pub fn mean_longitudes_sun_moon(t: f64) -> (f64, f64) {
    let sun = (280.4665 + 36_000.7698 * t).to_radians();
    let moon = (218.3165 + 481_267.8813 * t).to_radians();
    (sun, moon)
}

/// Nutation in longitude and obliquity, `(dpsi, deps)` in arcseconds.
///
/// ```text
/// dpsi = -17.20 sin(Om) - 1.32 sin(2L) - 0.23 sin(2L') + 0.21 sin(2 Om)
/// deps =   9.20 cos(Om) + 0.57 cos(2L) + 0.10 cos(2L') - 0.09 cos(2 Om)
/// ```
///
/// |dpsi| never exceeds 18.96" (sum of the amplitudes).
pub fn nutation_short_arcsec(t: f64) -> (f64, f64) {
    let om = fundamental_arguments(t)[4];
    let (l, lp) = mean_longitudes_sun_moon(t);

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * om).cos();
    (dpsi, deps)
}

/// Nutation in longitude in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_short_arcsec(t).0 / 3600.0
}
