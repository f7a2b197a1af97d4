//! Chart assembly: validated birth record in, complete [`Chart`] out.
//!
//! Pipeline per chart:
//! 1. coordinates, then UTC instant against the provider's coverage
//! 2. Julian Day, GMST and LST
//! 3. mean obliquity, ayanamsha
//! 4. tropical Lagna/MC, then sidereal
//! 5. bhava cusps from the sidereal Lagna/MC
//! 6. seven looked-up grahas plus the lunar nodes, placed in houses

use std::sync::Arc;

use chrono::FixedOffset;
use kundali_ephem::{EphemerisProvider, SupportedRange};
use kundali_frames::{mean_obliquity_deg, nutation_longitude_deg};
use kundali_time::{TimeContext, jd_to_centuries, ut_to_tt_jd};
use kundali_vedic::{
    ALL_GRAHAS, Graha, SiderealLongitude, ayanamsha_deg, compute_bhavas, format_longitude_dms,
    house_of, ketu_from_rahu, lagna_and_mc_deg, rahu_deg, rashi_from_longitude, validate_coordinates,
    validate_instant,
};
use log::debug;

use crate::birth::BirthInput;
use crate::chart::{Chart, ChartDebug, HouseCusp, SiderealPosition};
use crate::config::ChartConfig;
use crate::error::ChartError;

/// Chart engine: configuration plus a shared ephemeris provider.
///
/// `ChartEngine` is [`Send`] + [`Sync`] and holds no mutable state, so one
/// instance can serve every request via `Arc<ChartEngine>`.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: ChartConfig,
    default_offset: FixedOffset,
    provider: Arc<dyn EphemerisProvider>,
}

impl ChartEngine {
    /// Build the configured ephemeris provider, then validate through
    /// [`ChartEngine::with_provider`].
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let provider = config.build_provider()?;
        Self::with_provider(config, provider)
    }

    /// Use an already-built provider, ignoring `config.ephemeris_path`.
    pub fn with_provider(
        config: ChartConfig,
        provider: Arc<dyn EphemerisProvider>,
    ) -> Result<Self, ChartError> {
        config.validate()?;
        let default_offset = config.default_offset()?;
        debug!(
            "chart engine ready: provider {}, houses {}, nodes {}, nutation {}",
            provider.name(),
            config.house_system,
            config.node_mode,
            config.use_nutation
        );
        Ok(Self {
            config,
            default_offset,
            provider,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<dyn EphemerisProvider> {
        &self.provider
    }

    /// Window of birth instants the engine accepts.
    pub fn supported_range(&self) -> SupportedRange {
        self.provider.coverage()
    }

    /// Compute a chart. Fails before any astronomy if the input is invalid;
    /// never returns a partial chart.
    pub fn compute(&self, input: &BirthInput) -> Result<Chart, ChartError> {
        validate_coordinates(input.latitude, input.longitude)?;
        let utc = input.instant.to_utc(self.default_offset)?;
        validate_instant(&utc, &self.supported_range())?;

        let time = TimeContext::new(utc, input.longitude);
        let t_ut = time.centuries();
        let t_tt = jd_to_centuries(ut_to_tt_jd(time.julian_day));
        let eps_deg = mean_obliquity_deg(t_ut);
        let ayanamsa_deg = ayanamsha_deg(time.julian_day, self.config.use_nutation);
        debug!(
            "jd {:.6} gmst {:.6} lst {:.6} eps {:.6} aya {:.6}",
            time.julian_day, time.gmst_deg, time.lst_deg, eps_deg, ayanamsa_deg
        );

        let angles = lagna_and_mc_deg(time.lst_deg, input.latitude, eps_deg);
        let lagna = SiderealLongitude::new(angles.ascendant_deg, ayanamsa_deg);
        let mc = SiderealLongitude::new(angles.mc_deg, ayanamsa_deg);
        debug!(
            "tropical asc {:.6} mc {:.6}; sidereal asc {:.6} mc {:.6}",
            angles.ascendant_deg, angles.mc_deg, lagna.sidereal_deg, mc.sidereal_deg
        );

        let bhavas = compute_bhavas(self.config.house_system, lagna.sidereal_deg, mc.sidereal_deg);
        let cusps = bhavas.cusps();

        let (rahu, ketu) = self.node_position(t_tt, ayanamsa_deg);
        let positions = ALL_GRAHAS
            .iter()
            .map(|graha| -> Result<SiderealLongitude, ChartError> {
                match graha.body() {
                    Some(body) => {
                        let tropical = self.provider.tropical_longitude_deg(body, &utc)?;
                        Ok(SiderealLongitude::new(tropical, ayanamsa_deg))
                    }
                    None if *graha == Graha::Ketu => Ok(ketu),
                    None => Ok(rahu),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Positions are in ALL_GRAHAS order.
        let moon_sign = positions[usize::from(Graha::Chandra.index())].rashi.rashi;

        let planets = ALL_GRAHAS
            .iter()
            .zip(&positions)
            .map(|(&graha, position)| {
                debug!(
                    "{graha}: tropical {:.6} sidereal {:.6}",
                    position.tropical_deg, position.sidereal_deg
                );
                SiderealPosition {
                    graha,
                    tropical_deg: position.tropical_deg,
                    sidereal_deg: position.sidereal_deg,
                    sign: position.rashi.rashi,
                    sign_number: position.rashi.sign_number,
                    deg_in_sign: position.rashi.degrees_in_rashi,
                    dms: position.rashi.dms.to_string(),
                    house: house_of(position.sidereal_deg, &cusps),
                }
            })
            .collect();

        let houses = bhavas
            .bhavas
            .iter()
            .map(|b| {
                let rashi = rashi_from_longitude(b.cusp_deg);
                HouseCusp {
                    house: b.number,
                    cusp_deg: b.cusp_deg,
                    sign: rashi.rashi,
                    sign_number: rashi.sign_number,
                    dms: format_longitude_dms(b.cusp_deg),
                }
            })
            .collect();

        Ok(Chart {
            name: input.name.clone(),
            birthplace: input.birthplace.clone(),
            utc_instant: utc,
            julian_day: time.julian_day,
            house_system: self.config.house_system,
            ayanamsa_deg,
            lagna_sidereal_deg: lagna.sidereal_deg,
            lagna_sign: lagna.rashi.rashi,
            lagna_dms: lagna.rashi.dms.to_string(),
            mc_sidereal_deg: mc.sidereal_deg,
            moon_sign,
            houses_sidereal: houses,
            planets_sidereal: planets,
            debug: ChartDebug {
                gmst_deg: time.gmst_deg,
                gmst_hours: time.gmst_hours,
                lst_deg: time.lst_deg,
                lst_hours: time.lst_hours,
                eps_deg,
                primary_tropical_asc_deg: angles.ascendant_deg,
                primary_tropical_mc_deg: angles.mc_deg,
            },
        })
    }

    /// Rahu and Ketu.
    ///
    /// The node theory is referred to the mean equinox; with nutation on,
    /// the nutation in longitude is added so the node shares the equinox of
    /// the true ayanamsha it is reduced by.
    fn node_position(
        &self,
        t_tt: f64,
        ayanamsa_deg: f64,
    ) -> (SiderealLongitude, SiderealLongitude) {
        let mut tropical = rahu_deg(t_tt, self.config.node_mode);
        if self.config.use_nutation {
            tropical += nutation_longitude_deg(t_tt);
        }
        let rahu = SiderealLongitude::new(tropical, ayanamsa_deg);
        (rahu, opposite(&rahu))
    }
}

/// The point diametrically opposite, in both zodiacs.
fn opposite(p: &SiderealLongitude) -> SiderealLongitude {
    let sidereal_deg = ketu_from_rahu(p.sidereal_deg);
    SiderealLongitude {
        tropical_deg: ketu_from_rahu(p.tropical_deg),
        sidereal_deg,
        rashi: rashi_from_longitude(sidereal_deg),
    }
}
