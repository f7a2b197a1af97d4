//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standard spherical astronomy for the ecliptic longitudes of the rising
//! point and the upper meridian crossing (Meeus, *Astronomical Algorithms*
//! 2nd ed., ch. 13 and 14), from local sidereal time, geographic latitude
//! and the obliquity of the ecliptic.
//!
//! The bare `atan2` ascendant formula can land on the setting point
//! (the descendant) depending on the quadrant of LST, so the candidate is
//! checked against the MC: the Lagna is the ecliptic-horizon intersection
//! reached from the MC by a forward arc below 180 deg, and a candidate at
//! 180 or more is flipped.
//!
//! Between the polar circles (|phi| < 90 - eps) that point is always on the
//! eastern horizon. Beyond them the ecliptic can lie so that the MC rule
//! and the eastern horizon pick different intersections; the MC rule wins.
//! For part of the sidereal day the polar Lagna is then the point setting
//! in the west, and the cusp geometry built on Lagna and MC stays
//! consistent. At |phi| = 90 the horizon is the celestial equator and the
//! forward arc can reach 0.

use log::warn;

use crate::util::{arc_forward, normalize_360};

/// Latitudes at or beyond this magnitude are treated as polar.
pub const POLAR_LATITUDE_DEG: f64 = 89.999;

/// MC longitude in degrees from LST and obliquity (both degrees).
///
/// `MC = atan2(sin LST, cos LST * cos eps)`
pub fn mc_longitude_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Ascendant longitude straight from the `atan2` branch, before the MC
/// consistency check.
///
/// `Asc = atan2(-cos LST, sin LST * cos eps + tan phi * sin eps)`
pub fn raw_ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Flip a candidate ascendant onto the rising side of the MC.
///
/// The forward arc MC -> Asc must lie below 180; a candidate whose arc is
/// 180 or more is the other intersection and gets 180 added.
pub fn disambiguate_ascendant(candidate_deg: f64, mc_deg: f64) -> f64 {
    if arc_forward(mc_deg, candidate_deg) >= 180.0 {
        normalize_360(candidate_deg + 180.0)
    } else {
        normalize_360(candidate_deg)
    }
}

/// Tropical ascendant and MC for one sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSet {
    /// Ascendant longitude in degrees, [0, 360).
    pub ascendant_deg: f64,
    /// MC longitude in degrees, [0, 360).
    pub mc_deg: f64,
    /// Obliquity used, degrees.
    pub obliquity_deg: f64,
}

/// Compute ascendant and MC together.
///
/// Above the polar circles the MC rule takes priority over the horizon
/// side (see the module docs). At the geographic poles the horizon is
/// degenerate; the result is still deterministic but carries no
/// astrological meaning.
pub fn lagna_and_mc_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> AngleSet {
    if latitude_deg.abs() >= POLAR_LATITUDE_DEG {
        warn!("latitude {latitude_deg} is polar; ascendant is degenerate");
    }
    let mc_deg = mc_longitude_deg(lst_deg, obliquity_deg);
    let raw = raw_ascendant_deg(lst_deg, latitude_deg, obliquity_deg);
    AngleSet {
        ascendant_deg: disambiguate_ascendant(raw, mc_deg),
        mc_deg,
        obliquity_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4392911;

    #[test]
    fn mc_at_lst_zero_is_aries_point() {
        assert!(mc_longitude_deg(0.0, EPS).abs() < 1e-10);
    }

    #[test]
    fn mc_at_lst_180_is_libra_point() {
        assert!((mc_longitude_deg(180.0, EPS) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn equator_lst_zero_rises_at_90() {
        // The raw branch gives the setting point here.
        let raw = raw_ascendant_deg(0.0, 0.0, EPS);
        assert!((raw - 270.0).abs() < 1e-9, "raw = {raw}");
        let set = lagna_and_mc_deg(0.0, 0.0, EPS);
        assert!((set.ascendant_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn equator_lst_90_rises_near_180() {
        let set = lagna_and_mc_deg(90.0, 0.0, EPS);
        assert!((set.mc_deg - 90.0).abs() < 1e-9);
        assert!((set.ascendant_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn forward_arc_from_mc_below_180() {
        for lat in [-66.0, -33.9, 0.0, 28.6139, 51.5, 66.0] {
            for step in 0..72 {
                let lst = step as f64 * 5.0;
                let set = lagna_and_mc_deg(lst, lat, EPS);
                let arc = arc_forward(set.mc_deg, set.ascendant_deg);
                assert!(arc > 0.0 && arc < 180.0, "lat {lat} lst {lst}: arc {arc}");
            }
        }
    }

    #[test]
    fn disambiguate_keeps_rising_candidate() {
        assert_eq!(disambiguate_ascendant(100.0, 10.0), 100.0);
        assert!((disambiguate_ascendant(280.0, 10.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn delhi_sample_ascendant_in_range() {
        let set = lagna_and_mc_deg(123.45, 28.6139, EPS);
        assert!((0.0..360.0).contains(&set.ascendant_deg));
        assert!((0.0..360.0).contains(&set.mc_deg));
    }

    fn eastern_horizon_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
        let lst = lst_deg.to_radians();
        let eps = EPS.to_radians();
        let phi = latitude_deg.to_radians();
        let y = lst.cos();
        let x = -(lst.sin() * eps.cos() + phi.tan() * eps.sin());
        normalize_360(f64::atan2(y, x).to_degrees())
    }

    fn gap(a: f64, b: f64) -> f64 {
        arc_forward(a, b).min(arc_forward(b, a))
    }

    fn horizon_disagreements(lat: f64) -> usize {
        (0..72)
            .map(|step| step as f64 * 5.0)
            .filter(|&lst| {
                let set = lagna_and_mc_deg(lst, lat, EPS);
                let east = eastern_horizon_deg(lst, lat);
                let g = gap(set.ascendant_deg, east);
                assert!(g < 1e-9 || (g - 180.0).abs() < 1e-9, "lat {lat} lst {lst}: {g}");
                g > 1e-9
            })
            .count()
    }

    #[test]
    fn eastern_horizon_between_polar_circles() {
        for lat in [-66.0, -45.0, 0.0, 28.6139, 51.5, 66.0] {
            assert_eq!(horizon_disagreements(lat), 0, "lat {lat}");
        }
    }

    #[test]
    fn mc_rule_wins_beyond_polar_circles() {
        // The chosen point is the other horizon intersection for part of
        // the day, and that share grows towards the pole.
        let mut last = 0;
        for lat in [66.6, 70.0, 80.0, 89.0] {
            let north = horizon_disagreements(lat);
            let south = horizon_disagreements(-lat);
            assert!(north > last, "lat {lat}: {north} after {last}");
            assert_eq!(north, south, "lat {lat}");
            last = north;
        }
    }

    #[test]
    fn polar_forward_arc_below_180() {
        for lat in [66.6, 70.0, 80.0, 89.0, 89.999, 90.0] {
            for sign in [1.0, -1.0] {
                for step in 0..72 {
                    let lst = step as f64 * 5.0;
                    let set = lagna_and_mc_deg(lst, sign * lat, EPS);
                    let arc = arc_forward(set.mc_deg, set.ascendant_deg);
                    assert!(arc < 180.0, "lat {} lst {lst}: arc {arc}", sign * lat);
                    assert!((0.0..360.0).contains(&set.ascendant_deg));
                }
            }
        }
    }

    #[test]
    fn polar_sripati_cusps_stay_consistent() {
        use crate::bhava::compute_sripati;

        for lat in [66.6, 70.0, 80.0, 89.0, 90.0, -70.0, -80.0, -90.0] {
            for step in 0..72 {
                let lst = step as f64 * 5.0;
                let set = lagna_and_mc_deg(lst, lat, EPS);
                let c = compute_sripati(set.ascendant_deg, set.mc_deg);
                assert!((arc_forward(c[0], c[6]) - 180.0).abs() < 1e-9, "lat {lat} lst {lst}");
                assert!((arc_forward(c[9], c[3]) - 180.0).abs() < 1e-9, "lat {lat} lst {lst}");
                for q in 0..4 {
                    let first = q * 3;
                    let next = (first + 3) % 12;
                    let parts = arc_forward(c[first], c[first + 1])
                        + arc_forward(c[first + 1], c[first + 2])
                        + arc_forward(c[first + 2], c[next]);
                    let whole = arc_forward(c[first], c[next]);
                    assert!((whole - parts).abs() < 1e-9, "lat {lat} lst {lst} q {q}");
                }
            }
        }
    }

    #[test]
    fn pole_is_deterministic() {
        let a = lagna_and_mc_deg(45.0, 90.0, EPS);
        let b = lagna_and_mc_deg(45.0, 90.0, EPS);
        assert_eq!(a, b);
        assert!(a.ascendant_deg.is_finite());
    }
}
