//! Ayanamsha: the angle between the tropical and sidereal zodiacs.
//!
//! Linear model anchored at the Julian epoch J285.0, when the two zodiacs
//! coincide, advancing at 50.23885 arcsec per Julian year. The true value
//! adds the nutation in longitude so sidereal positions are referred to the
//! true equinox of date, like the apparent tropical longitudes they are
//! subtracted from.

use kundali_frames::nutation_longitude_deg;
use kundali_time::{DAYS_PER_JULIAN_YEAR, jd_to_centuries, julian_epoch_to_jd};

/// Precession rate used by the model, arcseconds per Julian year.
pub const AYANAMSHA_RATE_ARCSEC_PER_YEAR: f64 = 50.238_85;

/// Julian year at which the ayanamsha is zero.
pub const AYANAMSHA_ZERO_EPOCH_YEAR: f64 = 285.0;

/// Julian Date of the zero epoch (J285.0).
pub fn zero_epoch_jd() -> f64 {
    julian_epoch_to_jd(AYANAMSHA_ZERO_EPOCH_YEAR)
}

/// Mean ayanamsha in degrees at a Julian Date.
pub fn ayanamsha_mean_deg(jd: f64) -> f64 {
    let years = (jd - zero_epoch_jd()) / DAYS_PER_JULIAN_YEAR;
    years * AYANAMSHA_RATE_ARCSEC_PER_YEAR / 3600.0
}

/// Mean ayanamsha plus nutation in longitude, in degrees.
pub fn ayanamsha_true_deg(jd: f64) -> f64 {
    ayanamsha_mean_deg(jd) + nutation_longitude_deg(jd_to_centuries(jd))
}

/// Ayanamsha in degrees, true when `use_nutation` is set, else mean.
pub fn ayanamsha_deg(jd: f64, use_nutation: bool) -> f64 {
    if use_nutation {
        ayanamsha_true_deg(jd)
    } else {
        ayanamsha_mean_deg(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::{J2000_JD, calendar_to_jd};

    #[test]
    fn zero_epoch_jd_value() {
        assert!((zero_epoch_jd() - 1_825_141.25).abs() < 1e-9);
    }

    #[test]
    fn zero_at_epoch() {
        assert!(ayanamsha_mean_deg(zero_epoch_jd()).abs() < 1e-12);
    }

    #[test]
    fn j2000_value_near_23_9() {
        // 1715 years * 50.23885" = 86159.6" = 23.9332 deg
        let aya = ayanamsha_mean_deg(J2000_JD);
        assert!((aya - 23.9332).abs() < 1e-3, "aya = {aya}");
    }

    #[test]
    fn nutation_term_bounded() {
        for year in [1900, 1937, 1990, 2024, 2053] {
            let jd = calendar_to_jd(year, 6, 1.0);
            let diff_arcsec = (ayanamsha_true_deg(jd) - ayanamsha_mean_deg(jd)) * 3600.0;
            assert!(diff_arcsec.abs() < 19.0, "{year}: {diff_arcsec}\"");
        }
    }

    #[test]
    fn flag_selects_mean_or_true() {
        let jd = calendar_to_jd(1990, 5, 15.375);
        assert_eq!(ayanamsha_deg(jd, false), ayanamsha_mean_deg(jd));
        assert_eq!(ayanamsha_deg(jd, true), ayanamsha_true_deg(jd));
    }

    #[test]
    fn one_year_adds_rate() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        let d = ayanamsha_mean_deg(jd + DAYS_PER_JULIAN_YEAR) - ayanamsha_mean_deg(jd);
        assert!((d * 3600.0 - AYANAMSHA_RATE_ARCSEC_PER_YEAR).abs() < 1e-6);
    }
}
