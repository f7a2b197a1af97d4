//! Types for bhava (house) computation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Sripati (Porphyry): trisect the four quadrant arcs.
    #[default]
    Sripati,
    /// Equal houses: each house spans exactly 30 degrees from the Lagna.
    Equal,
}

/// All house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 2] = [HouseSystem::Sripati, HouseSystem::Equal];

impl HouseSystem {
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sripati => "sripati",
            Self::Equal => "equal",
        }
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sripati" | "porphyry" => Ok(Self::Sripati),
            "equal" => Ok(Self::Equal),
            other => Err(format!("unknown house system '{other}' (expected sripati or equal)")),
        }
    }
}

/// A single bhava (house).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
    /// Start of this bhava in degrees (the cusp itself).
    pub start_deg: f64,
    /// End of this bhava in degrees. Equals the next bhava's start.
    pub end_deg: f64,
}

impl Bhava {
    /// Forward width of the bhava in degrees.
    pub fn span_deg(&self) -> f64 {
        crate::util::arc_forward(self.start_deg, self.end_deg)
    }
}

/// Twelve bhavas plus the Lagna/MC they were built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BhavaResult {
    pub system: HouseSystem,
    /// The 12 bhavas, `bhavas[0]` = house 1.
    pub bhavas: [Bhava; 12],
    pub lagna_deg: f64,
    pub mc_deg: f64,
}

impl BhavaResult {
    /// Cusp longitudes in house order.
    pub fn cusps(&self) -> [f64; 12] {
        self.bhavas.map(|b| b.cusp_deg)
    }
}
