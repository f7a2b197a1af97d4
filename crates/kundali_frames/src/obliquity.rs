//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 1976 (Lieske et al. 1977) polynomial as tabulated in the
//! Astronomical Almanac. Public domain (IAU standard).

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
///
/// `eps = 23.4392911 - 0.013004167 T - 0.000000164 T^2 + 0.000000504 T^3`
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    OBLIQUITY_J2000_DEG - 0.013_004_167 * t - 0.000_000_164 * t2 + 0.000_000_504 * t3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn decreasing_over_current_era() {
        assert!(mean_obliquity_deg(0.5) < mean_obliquity_deg(-1.0));
    }

    #[test]
    fn year_1900_value() {
        // ~23.4523 deg at 1900.0
        let eps = mean_obliquity_deg(-1.0);
        assert!((eps - 23.4523).abs() < 0.001, "eps = {eps}");
    }
}
