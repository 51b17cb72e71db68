//! Chart the stars of a Yale Bright Star Catalogue file
//!
//! Prints each star brighter than the magnitude limit together with the unit
//! direction a renderer should place it along.
//!
//! Usage:
//!   cargo run --bin starchart -- --catalog bsc5.dat [--magnitude-limit 4.5] [--format json]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use starchart::{ChartConfig, DeclinationConversion, StarChart, StarCatalog, StarRecord};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One aligned line per star
    Text,
    /// JSON array of stars
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "starchart",
    about = "Charts bright stars from a Yale Bright Star Catalogue file",
    long_about = None
)]
struct Args {
    /// Path to the catalog (BSC5 ASCII format)
    #[arg(long)]
    catalog: PathBuf,

    /// JSON chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only chart stars brighter than this magnitude (overrides config)
    #[arg(long)]
    magnitude_limit: Option<f64>,

    /// Use sign-aware degrees/minutes/seconds for declination
    #[arg(long)]
    sexagesimal_declination: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct ChartedStar<'a> {
    #[serde(flatten)]
    star: &'a StarRecord,
    direction: [f64; 3],
}

impl<'a> From<&'a StarRecord> for ChartedStar<'a> {
    fn from(star: &'a StarRecord) -> Self {
        let d = star.direction();
        Self {
            star,
            direction: [d.x, d.y, d.z],
        }
    }
}

fn build_config(args: &Args) -> Result<ChartConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::load_from_file(path)?,
        None => ChartConfig::default(),
    };
    if let Some(limit) = args.magnitude_limit {
        config.magnitude_limit = limit;
    }
    if args.sexagesimal_declination {
        config.declination = DeclinationConversion::Sexagesimal;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    let mut chart = StarChart::new(config);
    chart.load_catalog(&args.catalog)?;
    let catalog = chart.chart()?;

    match args.format {
        OutputFormat::Json => {
            let charted: Vec<ChartedStar> = catalog.stars().map(ChartedStar::from).collect();
            println!("{}", serde_json::to_string_pretty(&charted)?);
        }
        OutputFormat::Text => {
            for star in catalog.stars() {
                let d = star.direction();
                println!(
                    "{:<20} ra {:>8.3}°  dec {:>8.3}°  mag {:>5.2}  {:<20}  dir ({:>7.4}, {:>7.4}, {:>7.4})",
                    star.name(),
                    star.right_ascension().to_degrees(),
                    star.declination().to_degrees(),
                    star.apparent_magnitude(),
                    star.spectral_type().trim_end(),
                    d.x,
                    d.y,
                    d.z
                );
            }
            let summary = catalog.summary();
            println!(
                "Charted {} of {} catalog lines ({} rejected, magnitude < {})",
                summary.kept, summary.lines, summary.rejected, config.magnitude_limit
            );
        }
    }

    Ok(())
}
