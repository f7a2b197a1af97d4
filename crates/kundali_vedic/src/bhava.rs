//! Bhava (house) cusp computation.
//!
//! Both systems work from the sidereal Lagna and MC:
//!
//! - Sripati: cusps 1, 4, 7, 10 are Asc, IC, Desc, MC; each quadrant arc
//!   between them is split into three equal parts.
//! - Equal: cusp *i* is Asc + 30 (i - 1).

use crate::bhava_types::{Bhava, BhavaResult, HouseSystem};
use crate::util::{arc_forward, normalize_360};

/// Cusps for any supported system, in house order.
pub fn compute_cusps(system: HouseSystem, asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    match system {
        HouseSystem::Sripati => compute_sripati(asc_deg, mc_deg),
        HouseSystem::Equal => compute_equal(asc_deg),
    }
}

/// Compute all twelve bhavas.
pub fn compute_bhavas(system: HouseSystem, asc_deg: f64, mc_deg: f64) -> BhavaResult {
    let cusps = compute_cusps(system, asc_deg, mc_deg);
    BhavaResult {
        system,
        bhavas: build_bhavas(&cusps),
        lagna_deg: normalize_360(asc_deg),
        mc_deg: normalize_360(mc_deg),
    }
}

fn compute_equal(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Sripati: trisect the four quadrant arcs between Asc/IC/Desc/MC.
///
/// Cusps 2,3 trisect (Asc->IC); 5,6 trisect (IC->Desc);
/// 8,9 trisect (Desc->MC); 11,12 trisect (MC->Asc).
pub fn compute_sripati(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let asc_deg = normalize_360(asc_deg);
    let mc_deg = normalize_360(mc_deg);
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    let quadrants = [
        (0, asc_deg, ic_deg),
        (3, ic_deg, desc_deg),
        (6, desc_deg, mc_deg),
        (9, mc_deg, asc_deg),
    ];
    for (first, from, to) in quadrants {
        let arc = arc_forward(from, to);
        cusps[first] = from;
        cusps[first + 1] = normalize_360(from + arc / 3.0);
        cusps[first + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

fn build_bhavas(cusps: &[f64; 12]) -> [Bhava; 12] {
    std::array::from_fn(|i| Bhava {
        number: (i + 1) as u8,
        cusp_deg: cusps[i],
        start_deg: cusps[i],
        end_deg: cusps[(i + 1) % 12],
    })
}

/// House number (1-12) whose forward arc `[cusp_i, cusp_{i+1})` contains
/// `longitude_deg`.
///
/// Measured as a forward arc from cusp 1, so it stays correct when the
/// zodiac wraps through 0 deg inside a house.
pub fn house_of(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let offset = arc_forward(cusps[0], longitude_deg);
    for i in 0..12 {
        let end = if i == 11 { 360.0 } else { arc_forward(cusps[0], cusps[i + 1]) };
        if offset < end {
            return (i + 1) as u8;
        }
    }
    12
}
