use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kundali_chart::{
    AnalyticEphemeris, BirthInput, Chart, ChartConfig, ChartEngine, ChartError, HouseSystem,
    NodeMode, SupportedRange, TabulatedEphemeris,
};
use kundali_ephem::build_dataset;
use kundali_time::{BirthInstant, jd_from_utc, offset_from_minutes};
use kundali_vedic::{Dms, ayanamsha_deg, format_dms, rashi_from_longitude};
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(name = "kundali", version, about = "Sidereal birth chart calculator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a birth chart
    Chart {
        /// Birth date-time, ISO-8601, offset optional (e.g. 1990-05-15T14:30:00)
        #[arg(long, required_unless_present = "input", conflicts_with = "input")]
        date: Option<String>,
        /// Latitude in degrees north
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        lat: Option<f64>,
        /// Longitude in degrees east
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        lon: Option<f64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        birthplace: Option<String>,
        /// JSON birth record instead of --date/--lat/--lon
        #[arg(long)]
        input: Option<PathBuf>,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// House system override: sripati or equal
        #[arg(long)]
        houses: Option<HouseSystem>,
        /// Node override: mean or true
        #[arg(long)]
        nodes: Option<NodeMode>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the supported date window
    Coverage {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Ayanamsha at a date-time
    Ayanamsha {
        /// Date-time, ISO-8601, offset optional
        #[arg(long)]
        date: String,
        /// Offset in minutes applied when --date has none
        #[arg(long, default_value = "330", allow_hyphen_values = true)]
        offset_minutes: i32,
        /// Leave out the nutation term
        #[arg(long)]
        mean: bool,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Convert DMS text (D°M'S") to decimal degrees
    Deg {
        /// Angle as D°M'S" or decimal
        #[arg(allow_hyphen_values = true)]
        dms: String,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Fit a tabulated ephemeris dataset from the analytic theories
    FitEphemeris {
        /// Output JSON path
        #[arg(long)]
        output: PathBuf,
        /// First covered day (default 1899-07-29)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last covered day (default 2053-10-09)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Span of each Chebyshev segment, days
        #[arg(long, default_value = "8")]
        segment_days: f64,
        /// Coefficients per segment
        #[arg(long, default_value = "16")]
        degree: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ChartError>() {
                Some(chart_err) => eprintln!("error [{}]: {e:#}", chart_err.kind()),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Chart {
            date,
            lat,
            lon,
            name,
            birthplace,
            input,
            config,
            houses,
            nodes,
            json,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(system) = houses {
                config.house_system = system;
            }
            if let Some(mode) = nodes {
                config.node_mode = mode;
            }
            let engine = ChartEngine::new(config)?;

            let mut birth = match (input, date, lat, lon) {
                (Some(path), ..) => BirthInput::from_json_file(&path)?,
                (None, Some(date), Some(lat), Some(lon)) => BirthInput::parse(&date, lat, lon)?,
                _ => bail!("either --input or all of --date, --lat and --lon are required"),
            };
            if let Some(name) = name {
                birth = birth.with_name(name);
            }
            if let Some(place) = birthplace {
                birth = birth.with_birthplace(place);
            }

            let chart = engine.compute(&birth)?;
            if json {
                println!("{}", chart.to_json_pretty()?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Coverage { config } => {
            let engine = ChartEngine::new(load_config(config.as_deref())?)?;
            let range = engine.supported_range();
            println!("Provider: {}", engine.provider().name());
            println!("Window:   {range}");
            println!("Earliest: {}", range.min_utc().to_rfc3339());
            println!("Latest:   {}", range.max_utc().to_rfc3339());
        }

        Commands::Ayanamsha {
            date,
            offset_minutes,
            mean,
        } => {
            let instant: BirthInstant = date.parse()?;
            let utc = instant.to_utc(offset_from_minutes(offset_minutes)?)?;
            let jd = jd_from_utc(&utc);
            let aya = ayanamsha_deg(jd, !mean);
            println!("UTC:       {}", utc.to_rfc3339());
            println!("JD:        {jd:.6}");
            println!("Ayanamsha: {aya:.6} deg ({})", format_dms(aya));
        }

        Commands::Dms { deg } => {
            println!("{}", Dms::from_deg(deg));
        }

        Commands::Deg { dms } => {
            let parsed: Dms = dms.parse()?;
            println!("{:.6}", parsed.to_deg());
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::FitEphemeris {
            output,
            from,
            to,
            segment_days,
            degree,
        } => {
            let default = SupportedRange::de421();
            let range = SupportedRange::new(
                from.unwrap_or(default.first_day),
                to.unwrap_or(default.last_day),
            );
            if range.first_day > range.last_day {
                bail!("--from {} is after --to {}", range.first_day, range.last_day);
            }
            let source = AnalyticEphemeris::with_coverage(range);
            info!("fitting {range} with {segment_days} d segments of {degree} coefficients");
            let dataset = build_dataset(&source, &format!("analytic {range}"), segment_days, degree)?;
            TabulatedEphemeris::from_dataset(dataset)?
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {} covering {range}", output.display());
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(path) => Ok(ChartConfig::load(path)?),
        None => Ok(ChartConfig::default()),
    }
}

fn print_chart(chart: &Chart) {
    if let Some(name) = &chart.name {
        match &chart.birthplace {
            Some(place) => println!("Chart for {name}, {place}"),
            None => println!("Chart for {name}"),
        }
    }
    println!("UTC:        {}", chart.utc_instant.to_rfc3339());
    println!("JD:         {:.6}", chart.julian_day);
    println!("Houses:     {}", chart.house_system);
    println!(
        "Ayanamsha:  {:.6} deg ({})",
        chart.ayanamsa_deg,
        format_dms(chart.ayanamsa_deg)
    );
    println!(
        "Lagna:      {:.4} deg, {} {}",
        chart.lagna_sidereal_deg, chart.lagna_sign, chart.lagna_dms
    );
    println!("MC:         {:.4} deg", chart.mc_sidereal_deg);
    println!("Moon sign:  {}", chart.moon_sign);
    println!(
        "LST:        {:.6} h   GMST: {:.6} h   eps: {:.6} deg",
        chart.debug.lst_hours, chart.debug.gmst_hours, chart.debug.eps_deg
    );

    println!();
    println!("{:<6} {:>10}  {:<12} {:>14}", "House", "Cusp", "Sign", "DMS");
    for h in &chart.houses_sidereal {
        println!(
            "{:<6} {:>10.4}  {:<12} {:>14}",
            h.house,
            h.cusp_deg,
            h.sign.to_string(),
            h.dms
        );
    }

    println!();
    println!(
        "{:<8} {:>10} {:>10}  {:<12} {:>12} {:>6}",
        "Graha", "Tropical", "Sidereal", "Sign", "In sign", "House"
    );
    for p in &chart.planets_sidereal {
        println!(
            "{:<8} {:>10.4} {:>10.4}  {:<12} {:>12} {:>6}",
            p.graha.to_string(),
            p.tropical_deg,
            p.sidereal_deg,
            p.sign.to_string(),
            p.dms,
            p.house
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_from_flags() {
        let cli = Cli::try_parse_from([
            "kundali", "chart", "--date", "1990-05-15T14:30:00", "--lat", "28.6139", "--lon",
            "77.2090", "--houses", "equal",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { lat, houses, .. } => {
                assert_eq!(lat, Some(28.6139));
                assert_eq!(houses, Some(HouseSystem::Equal));
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn chart_needs_date_or_input() {
        assert!(Cli::try_parse_from(["kundali", "chart", "--lat", "1", "--lon", "2"]).is_err());
        assert!(Cli::try_parse_from(["kundali", "chart", "--input", "birth.json"]).is_ok());
    }

    #[test]
    fn negative_longitude_flag() {
        let cli = Cli::try_parse_from([
            "kundali", "chart", "--date", "2001-09-11T08:46:00-04:00", "--lat", "40.71", "--lon",
            "-74.0",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { lon, .. } => assert_eq!(lon, Some(-74.0)),
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["kundali", "-vv", "dms", "12.5"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn run_reports_chart_errors_with_kind() {
        let err = run(Commands::Chart {
            date: Some("1990-05-15T14:30:00".into()),
            lat: Some(91.0),
            lon: Some(77.2),
            name: None,
            birthplace: None,
            input: None,
            config: None,
            houses: None,
            nodes: None,
            json: true,
        })
        .unwrap_err();
        let chart_err = err.downcast_ref::<ChartError>().unwrap();
        assert_eq!(chart_err.kind().to_string(), "InvalidCoordinate");
    }
}
