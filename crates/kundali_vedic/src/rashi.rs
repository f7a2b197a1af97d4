//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::VedicError;
use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi containing a sidereal longitude.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let idx = (normalize_360(sidereal_lon_deg) / 30.0).floor() as usize;
        ALL_RASHIS[idx.min(11)]
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
///
/// Built by [`Dms::from_deg`], which truncates to hundredths of an
/// arcsecond. Truncation never carries into the next degree, so a position
/// just short of a sign boundary keeps its sign's degree count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.00..59.99), two decimals.
    pub seconds: f64,
}

const CENTI_ARCSEC_PER_DEG: u64 = 360_000;

/// Scaled values this close below a whole centi-arcsecond are that value;
/// decimal inputs such as 56.78" scale to 5677.999999... otherwise.
const SNAP_CENTI: f64 = 1e-6;

fn centi_arcsec(deg: f64) -> u64 {
    let scaled = deg.abs() * CENTI_ARCSEC_PER_DEG as f64;
    let nearest = scaled.round();
    if (nearest - scaled).abs() < SNAP_CENTI {
        nearest as u64
    } else {
        scaled.floor() as u64
    }
}

impl Dms {
    pub fn from_deg(deg: f64) -> Self {
        Self::from_centi(deg < 0.0, centi_arcsec(deg))
    }

    /// Like [`Dms::from_deg`], but never shows `limit_deg` or more whole
    /// degrees. Positions in a sign use 30, absolute longitudes 360.
    pub fn from_deg_below(deg: f64, limit_deg: u16) -> Self {
        let cap = (u64::from(limit_deg) * CENTI_ARCSEC_PER_DEG).saturating_sub(1);
        Self::from_centi(deg < 0.0, centi_arcsec(deg).min(cap))
    }

    fn from_centi(negative: bool, centi: u64) -> Self {
        let rem = centi % CENTI_ARCSEC_PER_DEG;
        Self {
            negative: negative && centi > 0,
            degrees: (centi / CENTI_ARCSEC_PER_DEG) as u16,
            minutes: (rem / 6_000) as u8,
            seconds: (rem % 6_000) as f64 / 100.0,
        }
    }

    pub fn to_deg(&self) -> f64 {
        let v = f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        if self.negative { -v } else { v }
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{}'{:.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

impl FromStr for Dms {
    type Err = VedicError;

    /// Parse `D°M'S"` (minutes and seconds optional) or a decimal degree
    /// value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VedicError::MalformedDms(s.to_string());
        let text = s.trim();
        if let Ok(deg) = text.parse::<f64>() {
            return if deg.is_finite() { Ok(Self::from_deg(deg)) } else { Err(malformed()) };
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (deg_part, rest) = body.split_once('°').ok_or_else(malformed)?;
        let (min_part, rest) = match rest.split_once('\'') {
            Some((m, r)) => (m, r),
            None => ("0", rest),
        };
        let sec_part = rest.trim().trim_end_matches('"');
        let sec_part = if sec_part.is_empty() { "0" } else { sec_part };

        let degrees: u16 = deg_part.trim().parse().map_err(|_| malformed())?;
        let minutes: u8 = min_part.trim().parse().map_err(|_| malformed())?;
        let seconds: f64 = sec_part.trim().parse().map_err(|_| malformed())?;
        if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
            return Err(malformed());
        }
        let value = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
        Ok(Self::from_deg(if negative { -value } else { value }))
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.to_deg()
}

/// Format decimal degrees as `D°M'S.ss"`.
pub fn format_dms(deg: f64) -> String {
    Dms::from_deg(deg).to_string()
}

/// Format an ecliptic longitude in [0, 360) as `D°M'S.ss"`, never
/// showing 360 degrees.
pub fn format_longitude_dms(lon_deg: f64) -> String {
    Dms::from_deg_below(normalize_360(lon_deg), 360).to_string()
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 1-based sign number (1 = Mesha).
    pub sign_number: u8,
    /// Decimal degrees within the rashi, [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi = Rashi::from_longitude(lon);
    // lon / 30 can round up to the next integer just below a boundary.
    let degrees_in_rashi = (lon - f64::from(rashi.index()) * 30.0).max(0.0);
    RashiInfo {
        rashi,
        sign_number: rashi.number(),
        degrees_in_rashi,
        dms: Dms::from_deg_below(degrees_in_rashi, 30),
    }
}
