//! Closed-form apparent geocentric longitudes.
//!
//! - Sun: low-precision solar theory (Meeus, *Astronomical Algorithms*
//!   2nd ed., ch. 25), about 0.01 deg.
//! - Moon: the 50 largest periodic terms of ELP-2000/82 in longitude
//!   (Meeus ch. 47), about 0.01 deg.
//! - Mercury..Saturn: JPL Keplerian elements valid 1800-2050 (Standish,
//!   "Keplerian Elements for Approximate Positions of the Major Planets"),
//!   reduced to geocentric with one light-time iteration and annual
//!   aberration, about 0.05 deg over the coverage window.
//!
//! All functions take `t`, Julian centuries of TT since J2000.0, and
//! return degrees in `[0, 360)` on the true ecliptic and equinox of date.

use chrono::{DateTime, Utc};
use kundali_frames::{
    cartesian_to_ecliptic, general_precession_longitude_deg, nutation_longitude_deg,
};
use kundali_time::{jd_from_utc, jd_to_centuries, normalize_360, ut_to_tt_jd};
use log::trace;

use crate::coverage::SupportedRange;
use crate::error::EphemerisError;
use crate::{Body, EphemerisProvider};

/// Light travel time in days per AU.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.495_52;

/// Sun-Earth distance part of solar aberration, arcseconds at 1 AU.
const SOLAR_ABERRATION_ARCSEC: f64 = 20.4898;

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Apparent geocentric longitude of the Sun.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_289 * sin_deg(3.0 * m);
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * cos_deg(m + c));

    let true_longitude = l0 + c;
    let aberration = -SOLAR_ABERRATION_ARCSEC / 3600.0 / radius_au;
    normalize_360(true_longitude + nutation_longitude_deg(t) + aberration)
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Periodic terms in longitude: multiples of (D, M, M', F) and the
/// coefficient in 1e-6 deg.
const MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 50] = [
    (0, 0, 1, 0, 6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),
    (0, 1, 0, 0, -185_116),
    (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),
    (2, -1, -1, 0, 57_066),
    (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),
    (0, 1, -1, 0, -40_923),
    (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),
    (2, 0, 0, -2, 15_327),
    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),
    (4, 0, -1, 0, 10_675),
    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),
    (2, 1, -1, 0, -7_888),
    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),
    (1, 1, 0, 0, 4_987),
    (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),
    (4, 0, 0, 0, 3_861),
    (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),
    (2, 0, -1, 2, -2_602),
    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),
    (2, -2, 0, 0, 2_236),
    (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),
    (2, -2, -1, 0, 2_048),
    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),
    (4, -1, -1, 0, 1_215),
    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),
    (2, 1, 1, 0, -810),
    (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),
    (2, 2, -1, 0, -700),
    (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),
    (4, 0, 1, 0, 549),
    (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),
    (1, 0, -2, 0, -487),
];

/// Geometric geocentric longitude of the Moon (mean equinox of date).
pub fn moon_geometric_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_prime =
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    // Eccentricity damping of terms in the solar anomaly.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum_l = 0.0;
    for &(cd, cm, cmp, cf, coeff) in &MOON_LONGITUDE_TERMS {
        let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * m_prime + f64::from(cf) * f;
        let damping = e.powi(i32::from(cm.unsigned_abs()));
        sum_l += f64::from(coeff) * damping * sin_deg(arg);
    }
    sum_l += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(l_prime - f) + 318.0 * sin_deg(a2);

    normalize_360(l_prime + sum_l / 1.0e6)
}

/// Apparent geocentric longitude of the Moon.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    normalize_360(moon_geometric_longitude_deg(t) + nutation_longitude_deg(t))
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

/// Keplerian elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    /// Semi-major axis (AU).
    a: [f64; 2],
    /// Eccentricity.
    e: [f64; 2],
    /// Inclination (deg).
    i: [f64; 2],
    /// Mean longitude (deg).
    l: [f64; 2],
    /// Longitude of perihelion (deg).
    varpi: [f64; 2],
    /// Longitude of ascending node (deg).
    node: [f64; 2],
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    varpi: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    varpi: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    varpi: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    varpi: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    varpi: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    varpi: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

/// Solve Kepler's equation `M = E - e sin E` for `E` (radians).
fn eccentric_anomaly(mean_anomaly_rad: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly_rad + e * mean_anomaly_rad.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly_rad - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

impl OrbitalElements {
    /// Heliocentric position (AU) in the J2000 ecliptic frame.
    fn heliocentric(&self, t: f64) -> [f64; 3] {
        let at = |p: [f64; 2]| p[0] + p[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let incl = at(self.i);
        let mean_lon = at(self.l);
        let varpi = at(self.varpi);
        let node = at(self.node);

        let arg_peri = varpi - node;
        let mean_anomaly = (mean_lon - varpi + 180.0).rem_euclid(360.0) - 180.0;
        let ecc = eccentric_anomaly(mean_anomaly.to_radians(), e);

        let xp = a * (ecc.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

        let (sw, cw) = (sin_deg(arg_peri), cos_deg(arg_peri));
        let (so, co) = (sin_deg(node), cos_deg(node));
        let (si, ci) = (sin_deg(incl), cos_deg(incl));

        [
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            sw * si * xp + cw * si * yp,
        ]
    }
}

fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// The five classical planets with Keplerian theories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    fn elements(self) -> &'static OrbitalElements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }

    pub fn from_body(body: Body) -> Option<Self> {
        match body {
            Body::Mercury => Some(Self::Mercury),
            Body::Venus => Some(Self::Venus),
            Body::Mars => Some(Self::Mars),
            Body::Jupiter => Some(Self::Jupiter),
            Body::Saturn => Some(Self::Saturn),
            Body::Sun | Body::Moon => None,
        }
    }
}

/// Apparent geocentric longitude of a planet.
pub fn planet_apparent_longitude_deg(planet: Planet, t: f64) -> f64 {
    let elements = planet.elements();
    let earth = EARTH_MOON_BARYCENTER.heliocentric(t);

    let first = cartesian_to_ecliptic(&sub(&elements.heliocentric(t), &earth));
    let tau_centuries = LIGHT_TIME_DAYS_PER_AU * first.distance / kundali_time::DAYS_PER_CENTURY;
    let geo = cartesian_to_ecliptic(&sub(&elements.heliocentric(t - tau_centuries), &earth));

    let sun_lon = (-earth[1]).atan2(-earth[0]).to_degrees();
    let aberration =
        -ABERRATION_ARCSEC / 3600.0 * cos_deg(sun_lon - geo.lon_deg) / cos_deg(geo.lat_deg);

    normalize_360(
        geo.lon_deg + aberration + general_precession_longitude_deg(t) + nutation_longitude_deg(t),
    )
}

/// Apparent tropical longitude of any supported body at TT centuries `t`.
pub fn apparent_longitude_deg(body: Body, t: f64) -> f64 {
    match body {
        Body::Sun => sun_apparent_longitude_deg(t),
        Body::Moon => moon_apparent_longitude_deg(t),
        Body::Mercury => planet_apparent_longitude_deg(Planet::Mercury, t),
        Body::Venus => planet_apparent_longitude_deg(Planet::Venus, t),
        Body::Mars => planet_apparent_longitude_deg(Planet::Mars, t),
        Body::Jupiter => planet_apparent_longitude_deg(Planet::Jupiter, t),
        Body::Saturn => planet_apparent_longitude_deg(Planet::Saturn, t),
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Built-in provider backed by the closed-form theories above.
///
/// Needs no data files. Instants outside the configured coverage are
/// rejected so that both providers answer for the same window.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    coverage: SupportedRange,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::with_coverage(SupportedRange::de421())
    }

    pub fn with_coverage(coverage: SupportedRange) -> Self {
        Self { coverage }
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &str {
        "analytic"
    }

    fn coverage(&self) -> SupportedRange {
        self.coverage
    }

    fn tropical_longitude_deg(&self, body: Body, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        if !self.coverage.contains(utc) {
            return Err(EphemerisError::Lookup {
                body,
                instant: utc.to_rfc3339(),
                reason: format!("outside analytic coverage {}", self.coverage),
            });
        }
        let jd_tt = ut_to_tt_jd(jd_from_utc(utc));
        let lon = apparent_longitude_deg(body, jd_to_centuries(jd_tt));
        trace!("analytic {body} at JD(TT) {jd_tt:.6}: {lon:.6} deg");
        Ok(lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centuries(jd_tt: f64) -> f64 {
        jd_to_centuries(jd_tt)
    }

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        if d > 180.0 { 360.0 - d } else { d }
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((eccentric_anomaly(1.234, 0.0) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn kepler_residual_is_tiny() {
        let m = 0.7_f64;
        let e = 0.2056;
        let ecc = eccentric_anomaly(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn earth_distance_near_one_au() {
        let r = cartesian_to_ecliptic(&EARTH_MOON_BARYCENTER.heliocentric(0.0)).distance;
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 October 13.0 TD
        let lon = sun_apparent_longitude_deg(centuries(2_448_908.5));
        assert!(angle_diff(lon, 199.908_95) < 0.01, "sun = {lon}");
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 April 12.0 TD
        let t = centuries(2_448_724.5);
        let geo = moon_geometric_longitude_deg(t);
        assert!(angle_diff(geo, 133.162_655) < 0.01, "moon = {geo}");
        let app = moon_apparent_longitude_deg(t);
        assert!(angle_diff(app, 133.167_265) < 0.01, "moon app = {app}");
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992 December 20.0 TD
        let lon = planet_apparent_longitude_deg(Planet::Venus, centuries(2_448_976.5));
        assert!(angle_diff(lon, 313.081_02) < 0.05, "venus = {lon}");
    }

    #[test]
    fn inner_planets_stay_near_sun() {
        for jd in [2_420_000.5, 2_440_000.5, 2_451_545.0, 2_465_000.5] {
            let t = centuries(jd);
            let sun = sun_apparent_longitude_deg(t);
            let mercury = planet_apparent_longitude_deg(Planet::Mercury, t);
            let venus = planet_apparent_longitude_deg(Planet::Venus, t);
            assert!(angle_diff(mercury, sun) < 28.5, "mercury elongation at {jd}");
            assert!(angle_diff(venus, sun) < 47.5, "venus elongation at {jd}");
        }
    }

    #[test]
    fn provider_rejects_outside_coverage() {
        use chrono::TimeZone;
        let eph = AnalyticEphemeris::new();
        let utc = Utc.with_ymd_and_hms(1899, 7, 28, 12, 0, 0).unwrap();
        let err = eph.tropical_longitude_deg(Body::Sun, &utc).unwrap_err();
        assert!(matches!(err, EphemerisError::Lookup { body: Body::Sun, .. }));
    }
}
