//! End-to-end chart computation against the built-in analytic ephemeris.

use std::sync::Arc;
use std::thread;

use kundali_chart::*;
use kundali_vedic::{arc_forward, house_of, normalize_360};

fn engine() -> ChartEngine {
    ChartEngine::new(ChartConfig::default()).expect("default engine")
}

fn delhi_1990() -> BirthInput {
    BirthInput::parse("1990-05-15T14:30:00", 28.6139, 77.2090)
        .expect("valid input")
        .with_name("Fixed scenario")
        .with_birthplace("New Delhi")
}

fn cusp_array(chart: &Chart) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (slot, h) in cusps.iter_mut().zip(&chart.houses_sidereal) {
        *slot = h.cusp_deg;
    }
    cusps
}

#[test]
fn fixed_scenario_is_byte_identical() {
    let input = delhi_1990();
    let first = engine().compute(&input).unwrap().to_json().unwrap();
    let second = engine().compute(&input).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn fixed_scenario_shape() {
    let chart = engine().compute(&delhi_1990()).unwrap();

    // 14:30 IST is 09:00 UTC.
    assert_eq!(chart.utc_instant.to_rfc3339(), "1990-05-15T09:00:00+00:00");
    assert!((chart.julian_day - 2_448_026.875).abs() < 1e-6);
    assert_eq!(chart.name.as_deref(), Some("Fixed scenario"));
    assert_eq!(chart.house_system, HouseSystem::Sripati);

    // 1705.37 years at 50.23885"/yr, plus at most ~0.005 deg of nutation.
    assert!((chart.ayanamsa_deg - 23.799).abs() < 0.01, "aya {}", chart.ayanamsa_deg);

    // Mid-May: the Sun is in sidereal Taurus (Vrishabha), about half a degree in.
    let sun = chart.planet(Graha::Surya).unwrap();
    assert_eq!(sun.sign, Rashi::Vrishabha);
    assert_eq!(sun.sign_number, 2);
    assert!((sun.tropical_deg - 54.28).abs() < 0.05, "sun {}", sun.tropical_deg);

    assert_eq!(chart.planets_sidereal.len(), 9);
    assert_eq!(chart.houses_sidereal.len(), 12);
    for (i, h) in chart.houses_sidereal.iter().enumerate() {
        assert_eq!(h.house as usize, i + 1);
        assert!((0.0..360.0).contains(&h.cusp_deg));
    }
    for p in &chart.planets_sidereal {
        assert!((0.0..360.0).contains(&p.sidereal_deg), "{:?}", p.graha);
        assert!((0.0..30.0).contains(&p.deg_in_sign), "{:?}", p.graha);
        assert!((1..=12).contains(&p.house));
        assert!(p.dms.ends_with('"'));
    }
    assert_eq!(chart.moon_sign, chart.planet(Graha::Chandra).unwrap().sign);
}

#[test]
fn json_carries_documented_fields() {
    let chart = engine().compute(&delhi_1990()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    for key in [
        "ayanamsa_deg",
        "lagna_sidereal_deg",
        "lagna_sign",
        "moon_sign",
        "houses_sidereal",
        "planets_sidereal",
        "debug",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    for key in [
        "gmst_deg",
        "gmst_hours",
        "lst_deg",
        "lst_hours",
        "eps_deg",
        "primary_tropical_asc_deg",
        "primary_tropical_mc_deg",
    ] {
        assert!(value["debug"].get(key).is_some(), "missing debug.{key}");
    }
    assert_eq!(value["planets_sidereal"][0]["graha"], "Sun");
    assert_eq!(value["planets_sidereal"][8]["graha"], "Ketu");
    assert_eq!(value["house_system"], "sripati");
}

#[test]
fn ketu_opposes_rahu_exactly() {
    for text in ["1900-01-01T12:00:00Z", "1990-05-15T14:30:00", "2050-06-30T23:00:00Z"] {
        let input = BirthInput::parse(text, 12.97, 77.59).unwrap();
        let chart = engine().compute(&input).unwrap();
        let rahu = chart.planet(Graha::Rahu).unwrap().sidereal_deg;
        let ketu = chart.planet(Graha::Ketu).unwrap().sidereal_deg;
        assert_eq!(ketu, normalize_360(rahu + 180.0), "{text}");
    }
}

#[test]
fn opposite_cusps_and_quadrants() {
    let chart = engine().compute(&delhi_1990()).unwrap();
    let c = cusp_array(&chart);
    assert!((arc_forward(c[0], c[6]) - 180.0).abs() < 1e-9);
    assert!((arc_forward(c[9], c[3]) - 180.0).abs() < 1e-9);
    for q in 0..4 {
        let first = q * 3;
        let next = (first + 3) % 12;
        let parts = arc_forward(c[first], c[first + 1])
            + arc_forward(c[first + 1], c[first + 2])
            + arc_forward(c[first + 2], c[next]);
        assert!((arc_forward(c[first], c[next]) - parts).abs() < 1e-9);
    }
    assert_eq!(c[0], chart.lagna_sidereal_deg);
    assert_eq!(c[9], chart.mc_sidereal_deg);
}

#[test]
fn planet_houses_agree_with_cusps() {
    let chart = engine().compute(&delhi_1990()).unwrap();
    let cusps = cusp_array(&chart);
    for p in &chart.planets_sidereal {
        assert_eq!(p.house, house_of(p.sidereal_deg, &cusps), "{:?}", p.graha);
    }
}

#[test]
fn equal_houses_step_thirty_degrees() {
    let engine = ChartEngine::new(ChartConfig {
        house_system: HouseSystem::Equal,
        ..ChartConfig::default()
    })
    .unwrap();
    let chart = engine.compute(&delhi_1990()).unwrap();
    let c = cusp_array(&chart);
    for i in 0..12 {
        let step = arc_forward(c[i], c[(i + 1) % 12]);
        assert!((step - 30.0).abs() < 1e-9, "house {}: {step}", i + 1);
    }
    assert_eq!(chart.house_system, HouseSystem::Equal);
}

#[test]
fn explicit_offset_matches_floating_ist() {
    let floating = engine().compute(&delhi_1990()).unwrap();
    let zoned = BirthInput::parse("1990-05-15T14:30:00+05:30", 28.6139, 77.2090).unwrap();
    let zoned = engine().compute(&zoned).unwrap();
    assert_eq!(floating.utc_instant, zoned.utc_instant);
    assert_eq!(floating.lagna_sidereal_deg, zoned.lagna_sidereal_deg);
}

#[test]
fn configured_offset_applies_to_floating_input() {
    let engine = ChartEngine::new(ChartConfig {
        default_utc_offset_minutes: 0,
        ..ChartConfig::default()
    })
    .unwrap();
    let chart = engine.compute(&delhi_1990()).unwrap();
    assert_eq!(chart.utc_instant.to_rfc3339(), "1990-05-15T14:30:00+00:00");
}

#[test]
fn lower_boundary() {
    let ok = BirthInput::parse("1899-07-29T00:00:00Z", 28.6, 77.2).unwrap();
    assert!(engine().compute(&ok).is_ok());

    let early = BirthInput::parse("1899-07-28T23:59:59Z", 28.6, 77.2).unwrap();
    let err = engine().compute(&early).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateOutOfRange);
    let msg = err.to_string();
    assert!(msg.contains("1899-07-28T23:59:59"), "{msg}");
    assert!(msg.contains("1899-07-29"), "{msg}");
    assert!(msg.contains("2053-10-09"), "{msg}");
}

#[test]
fn upper_boundary() {
    let ok = BirthInput::parse("2053-10-09T23:59:59Z", 28.6, 77.2).unwrap();
    assert!(engine().compute(&ok).is_ok());

    let late = BirthInput::parse("2053-10-10T00:00:00Z", 28.6, 77.2).unwrap();
    let err = engine().compute(&late).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateOutOfRange);
}

#[test]
fn floating_boundary_uses_offset() {
    // 05:29 IST on 1899-07-29 is still 1899-07-28 in UTC.
    let input = BirthInput::parse("1899-07-29T05:29:00", 28.6, 77.2).unwrap();
    let err = engine().compute(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateOutOfRange);
}

#[test]
fn bad_coordinates_win_over_bad_dates() {
    for date in ["1990-05-15T14:30:00", "1700-01-01T00:00:00Z", "2100-01-01T00:00:00Z"] {
        let lat = BirthInput::parse(date, 91.0, 77.2).unwrap();
        assert_eq!(engine().compute(&lat).unwrap_err().kind(), ErrorKind::InvalidCoordinate);
        let lon = BirthInput::parse(date, 28.6, 181.0).unwrap();
        assert_eq!(engine().compute(&lon).unwrap_err().kind(), ErrorKind::InvalidCoordinate);
    }
}

#[test]
fn nan_coordinate_rejected() {
    let input = BirthInput::parse("1990-05-15T14:30:00", f64::NAN, 77.2).unwrap();
    assert_eq!(engine().compute(&input).unwrap_err().kind(), ErrorKind::InvalidCoordinate);
}

#[test]
fn coverage_metadata() {
    let range = engine().supported_range();
    assert_eq!(range.min_utc().to_rfc3339(), "1899-07-29T00:00:00+00:00");
    assert_eq!(range.max_utc().to_rfc3339(), "2053-10-09T23:59:59+00:00");
}

#[test]
fn shared_engine_across_threads() {
    let engine = Arc::new(engine());
    let input = delhi_1990();
    let expected = engine.compute(&input).unwrap().to_json().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let input = input.clone();
            thread::spawn(move || engine.compute(&input).unwrap().to_json().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn true_node_differs_slightly_from_mean() {
    let mean = engine().compute(&delhi_1990()).unwrap();
    let true_engine = ChartEngine::new(ChartConfig {
        node_mode: NodeMode::True,
        ..ChartConfig::default()
    })
    .unwrap();
    let truth = true_engine.compute(&delhi_1990()).unwrap();
    let a = mean.planet(Graha::Rahu).unwrap().sidereal_deg;
    let b = truth.planet(Graha::Rahu).unwrap().sidereal_deg;
    let gap = arc_forward(a, b).min(arc_forward(b, a));
    assert!(gap < 2.1, "gap {gap}");
}

#[test]
fn polar_latitude_is_deterministic() {
    let input = BirthInput::parse("2000-01-01T12:00:00Z", 90.0, 0.0).unwrap();
    let a = engine().compute(&input).unwrap();
    let b = engine().compute(&input).unwrap();
    assert_eq!(a, b);
}
