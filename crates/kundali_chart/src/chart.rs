//! Computed chart: the serialized output of the engine.

use chrono::{DateTime, Utc};
use kundali_vedic::{Graha, HouseSystem, Rashi};
use serde::Serialize;

/// One house cusp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    /// Sidereal cusp longitude, [0, 360).
    pub cusp_deg: f64,
    pub sign: Rashi,
    pub sign_number: u8,
    /// Absolute cusp longitude as `D°M'S.ss"`.
    pub dms: String,
}

/// One graha in both zodiacs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiderealPosition {
    pub graha: Graha,
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
    pub sign: Rashi,
    pub sign_number: u8,
    /// Degrees within the sign, [0, 30).
    pub deg_in_sign: f64,
    /// `deg_in_sign` as `D°M'S.ss"`.
    pub dms: String,
    /// House (1-12) whose cusp arc contains the graha.
    pub house: u8,
}

/// Intermediate quantities, for diagnosing a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDebug {
    pub gmst_deg: f64,
    pub gmst_hours: f64,
    pub lst_deg: f64,
    pub lst_hours: f64,
    /// Mean obliquity of the ecliptic used for the angles.
    pub eps_deg: f64,
    pub primary_tropical_asc_deg: f64,
    pub primary_tropical_mc_deg: f64,
}

/// A complete sidereal birth chart. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    pub utc_instant: DateTime<Utc>,
    pub julian_day: f64,
    pub house_system: HouseSystem,
    pub ayanamsa_deg: f64,
    pub lagna_sidereal_deg: f64,
    pub lagna_sign: Rashi,
    pub lagna_dms: String,
    pub mc_sidereal_deg: f64,
    pub moon_sign: Rashi,
    pub houses_sidereal: Vec<HouseCusp>,
    pub planets_sidereal: Vec<SiderealPosition>,
    pub debug: ChartDebug,
}

impl Chart {
    /// Position of one graha.
    pub fn planet(&self, graha: Graha) -> Option<&SiderealPosition> {
        self.planets_sidereal.iter().find(|p| p.graha == graha)
    }

    /// Cusp of one house (1-12).
    pub fn house(&self, number: u8) -> Option<&HouseCusp> {
        self.houses_sidereal.iter().find(|h| h.house == number)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
