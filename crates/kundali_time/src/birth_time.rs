//! Birth date-time text parsing and UTC normalization.
//!
//! A birth record may carry its own UTC offset (`1990-05-15T14:30:00+05:30`)
//! or none at all (`1990-05-15T14:30:00`). Offset-less input is a local
//! wall-clock reading that is resolved against a caller-supplied default
//! offset, Indian Standard Time unless configured otherwise.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::TimeError;

/// Indian Standard Time, UTC+05:30, in minutes.
pub const IST_OFFSET_MINUTES: i32 = 330;

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// A birth date-time as written in the input, before UTC normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthInstant {
    /// Carries an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time with no offset information.
    Floating(NaiveDateTime),
}

impl BirthInstant {
    /// Whether the input carried its own offset.
    pub fn has_offset(&self) -> bool {
        matches!(self, Self::Zoned(_))
    }

    /// Resolve to a UTC instant.
    ///
    /// A zoned value keeps its own offset; a floating value is read in
    /// `default_offset`.
    pub fn to_utc(&self, default_offset: FixedOffset) -> Result<DateTime<Utc>, TimeError> {
        match self {
            Self::Zoned(dt) => Ok(dt.with_timezone(&Utc)),
            Self::Floating(naive) => default_offset
                .from_local_datetime(naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| TimeError::UnmappableLocalTime(naive.to_string())),
        }
    }
}

impl FromStr for BirthInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(TimeError::Malformed {
                input: s.to_string(),
                reason: "empty date-time".into(),
            });
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::Zoned(dt));
        }
        for fmt in ZONED_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
                return Ok(Self::Zoned(dt));
            }
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                return Ok(Self::Floating(naive));
            }
        }
        Err(TimeError::Malformed {
            input: s.to_string(),
            reason: "expected ISO-8601 such as 1990-05-15T14:30:00 or 1990-05-15T14:30:00+05:30"
                .into(),
        })
    }
}

impl Display for BirthInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Floating(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

/// Build a fixed offset from minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, TimeError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TimeError::InvalidOffset { minutes })
}

/// Parse a birth date-time and normalize it to UTC in one step.
pub fn parse_to_utc(text: &str, default_offset_minutes: i32) -> Result<DateTime<Utc>, TimeError> {
    let offset = offset_from_minutes(default_offset_minutes)?;
    text.parse::<BirthInstant>()?.to_utc(offset)
}
