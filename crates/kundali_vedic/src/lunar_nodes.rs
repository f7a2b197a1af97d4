//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: the fifth Delaunay argument (IERS Conventions 2010, Table
//! 5.2e), measured on the mean ecliptic and equinox of date.
//!
//! True node: mean node plus the principal short-period perturbations
//! (Meeus, *Astronomical Algorithms* 2nd ed., ch. 47).
//!
//! Ketu is always exactly opposite Rahu.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use kundali_frames::fundamental_arguments;
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean plus short-period perturbation corrections.
    True,
}

impl Display for NodeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mean => "mean",
            Self::True => "true",
        })
    }
}

impl FromStr for NodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            other => Err(format!("unknown node mode '{other}' (expected mean or true)")),
        }
    }
}

/// Mean Rahu longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(args[4].to_degrees())
}

/// Short-period correction for the true node, in degrees.
///
/// `args` = `[l, l', F, D, Omega]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    #[rustfmt::skip]
    static TERMS: [[f64; 6]; 13] = [
        // nl   nl'   nF    nD    nOm   amplitude (deg)
        [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
        [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
        [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
        [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
        [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
        [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
        [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
        [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
        [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
        [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
        [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
        [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
        [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle: f64 = term[..5].iter().zip(args).map(|(n, a)| n * a).sum();
            term[5] * angle.sin()
        })
        .sum()
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(args[4].to_degrees() + node_perturbation_deg(&args))
}

/// Rahu longitude for the selected mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu from a Rahu longitude: `normalize(rahu + 180)`.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Longitude of either node in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = rahu_deg(t, mode);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => ketu_from_rahu(rahu),
    }
}
