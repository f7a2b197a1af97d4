//! Time handling for chart computation.
//!
//! This crate provides:
//! - [0, period) wrapping for angles and hours, shared by every crate
//! - Birth date-time parsing with the naive -> assumed-IST -> UTC rule
//! - Julian Date <-> Gregorian calendar conversions
//! - Delta T (TT - UT) for dynamical-time ephemeris arguments
//! - Greenwich and Local Sidereal Time
//! - [`TimeContext`], the per-chart bundle of derived time quantities

pub mod angle;
pub mod birth_time;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

use chrono::{DateTime, Utc};

pub use angle::{normalize_360, wrap};
pub use birth_time::{BirthInstant, IST_OFFSET_MINUTES, offset_from_minutes, parse_to_utc};
pub use delta_t::{delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    jd_from_utc, jd_to_calendar, jd_to_centuries, julian_epoch_to_jd,
};
pub use sidereal::{degrees_to_hours, gmst_deg, gmst_hours, local_sidereal_time_deg};

/// Time quantities derived from one birth instant and observer longitude.
///
/// Invariant: `lst_deg == normalize(gmst_deg + longitude)`, and both hour
/// fields are the degree fields divided by 15.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeContext {
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub gmst_deg: f64,
    pub gmst_hours: f64,
    pub lst_deg: f64,
    pub lst_hours: f64,
}

impl TimeContext {
    /// Derive the context for a UTC instant at an east longitude in degrees.
    pub fn new(utc: DateTime<Utc>, longitude_east_deg: f64) -> Self {
        let julian_day = jd_from_utc(&utc);
        let gmst_hours = gmst_hours(julian_day);
        let gmst_deg = gmst_deg(julian_day);
        let lst_deg = local_sidereal_time_deg(gmst_deg, longitude_east_deg);
        Self {
            utc,
            julian_day,
            gmst_deg,
            gmst_hours,
            lst_deg,
            lst_hours: degrees_to_hours(lst_deg),
        }
    }

    /// Julian centuries since J2000.0 for this instant.
    pub fn centuries(&self) -> f64 {
        jd_to_centuries(self.julian_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn lst_is_gmst_plus_longitude() {
        let utc = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let ctx = TimeContext::new(utc, 77.209);
        let expected = (ctx.gmst_deg + 77.209).rem_euclid(360.0);
        assert!((ctx.lst_deg - expected).abs() < 1e-9);
        assert!((ctx.lst_hours * 15.0 - ctx.lst_deg).abs() < 1e-9);
    }

    #[test]
    fn west_longitude_context_non_negative() {
        let utc = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ctx = TimeContext::new(utc, -179.999);
        assert!((0.0..360.0).contains(&ctx.lst_deg));
        assert!((0.0..24.0).contains(&ctx.lst_hours));
    }

    #[test]
    fn centuries_sign() {
        let utc = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
        assert!(TimeContext::new(utc, 0.0).centuries() < 0.0);
    }
}
