//! Property tests for the UTC -> JD -> GMST -> LST chain.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use kundali_time::{TimeContext, gmst_hours, jd_from_utc, local_sidereal_time_deg};

proptest! {
    #[test]
    fn lst_always_in_range(gmst in 0.0f64..360.0, lon in -180.0f64..=180.0) {
        let lst = local_sidereal_time_deg(gmst, lon);
        prop_assert!((0.0..360.0).contains(&lst));
    }

    #[test]
    fn context_invariant_holds(secs in -2_216_160_000i64..2_643_000_000i64, lon in -180.0f64..=180.0) {
        let utc = Utc.timestamp_opt(secs, 0).unwrap();
        let ctx = TimeContext::new(utc, lon);
        let expected = (ctx.gmst_deg + lon).rem_euclid(360.0);
        let diff = (ctx.lst_deg - expected).abs();
        prop_assert!(diff < 1e-9 || (diff - 360.0).abs() < 1e-9);
        prop_assert!((0.0..24.0).contains(&ctx.gmst_hours));
    }
}

#[test]
fn sidereal_day_is_shorter_than_solar_day() {
    // One solar day later GMST has advanced ~3m 56.56s.
    let a = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap();
    let advance = (gmst_hours(jd_from_utc(&b)) - gmst_hours(jd_from_utc(&a))).rem_euclid(24.0);
    let minutes = advance * 60.0;
    assert!((minutes - 3.9426).abs() < 0.001, "advance = {minutes} min");
}

#[test]
fn julian_day_of_coverage_edges() {
    let lo = Utc.with_ymd_and_hms(1899, 7, 29, 0, 0, 0).unwrap();
    let hi = Utc.with_ymd_and_hms(2053, 10, 9, 0, 0, 0).unwrap();
    assert!((jd_from_utc(&lo) - 2_414_864.5).abs() < 1e-9);
    assert!((jd_from_utc(&hi) - 2_471_184.5).abs() < 1e-9);
}
