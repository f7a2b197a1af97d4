//! Supported date window of an ephemeris.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use kundali_time::jd_from_utc;
use serde::{Deserialize, Serialize};

const DE421_FIRST_DAY: NaiveDate = match NaiveDate::from_ymd_opt(1899, 7, 29) {
    Some(d) => d,
    None => panic!("invalid DE421 start date"),
};

const DE421_LAST_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2053, 10, 9) {
    Some(d) => d,
    None => panic!("invalid DE421 end date"),
};

/// Inclusive range of UTC calendar days an ephemeris can answer for.
///
/// The first instant accepted is `first_day` 00:00:00Z; every instant
/// strictly before the midnight that ends `last_day` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl SupportedRange {
    pub const fn new(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            first_day,
            last_day,
        }
    }

    /// The JPL DE421 span, 1899-07-29 through 2053-10-09.
    pub const fn de421() -> Self {
        Self::new(DE421_FIRST_DAY, DE421_LAST_DAY)
    }

    /// Earliest supported instant.
    pub fn min_utc(&self) -> DateTime<Utc> {
        self.first_day.and_time(NaiveTime::MIN).and_utc()
    }

    /// First instant past the end of the window (exclusive bound).
    pub fn end_utc(&self) -> DateTime<Utc> {
        self.last_day.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
    }

    /// Latest supported instant at whole-second resolution.
    pub fn max_utc(&self) -> DateTime<Utc> {
        self.end_utc() - TimeDelta::seconds(1)
    }

    pub fn contains(&self, utc: &DateTime<Utc>) -> bool {
        *utc >= self.min_utc() && *utc < self.end_utc()
    }

    /// `(start, end)` Julian Dates, end exclusive.
    pub fn jd_bounds(&self) -> (f64, f64) {
        (jd_from_utc(&self.min_utc()), jd_from_utc(&self.end_utc()))
    }
}

impl Default for SupportedRange {
    fn default() -> Self {
        Self::de421()
    }
}

impl Display for SupportedRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} through {}", self.first_day, self.last_day)
    }
}
