// src/main.rs
use anyhow::{bail, Context, Result};
use clap::Parser;
use commute_lib::directions::DirectionsRequest;
use commute_lib::models::Coordinate;
use commute_lib::proximity::ProximityEngine;
use commute_lib::resolver::{AddressResolver, GazetteerResolver};
use commute_lib::utils::config::{parse_radii, print_env_config_example, EngineConfig};
use commute_lib::utils::env::{load_env, load_env_from};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct SurveyArgs {
    /// Address to survey around (needs --gazetteer)
    #[arg(long)]
    address: Option<String>,

    /// JSON file mapping addresses to {"lat", "lng"}
    #[arg(long)]
    gazetteer: Option<PathBuf>,

    /// Reference latitude (used with --lng instead of an address)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Reference longitude
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Number of houses to generate
    #[arg(long)]
    count: Option<usize>,

    /// Maximum displacement from the address in degrees
    #[arg(long)]
    spread: Option<f64>,

    /// Comma-separated ascending band radii in meters
    #[arg(long)]
    radii: Option<String>,

    /// Fixed seed for a reproducible survey
    #[arg(long)]
    seed: Option<u64>,

    /// Print a driving directions request to this house index
    #[arg(long)]
    select: Option<usize>,

    /// Write the survey JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra env file to load before reading configuration
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Print the supported environment variables and exit
    #[arg(long)]
    print_env: bool,
}

fn main() -> Result<()> {
    let args = SurveyArgs::parse();
    if args.print_env {
        print_env_config_example();
        return Ok(());
    }

    // Initialize logging and environment
    env_logger::init();
    info!("Starting commute proximity survey");
    load_env();
    if let Some(path) = &args.env_file {
        load_env_from(path)?;
    }

    let mut config = EngineConfig::from_env();
    if let Some(count) = args.count {
        config.candidate_count = count;
    }
    if let Some(spread) = args.spread {
        config.spread_degrees = spread;
    }
    if let Some(raw) = &args.radii {
        config.band_radii_meters = parse_radii(raw)
            .with_context(|| format!("Could not parse --radii '{}'", raw))?;
    }
    config.log_config();

    let reference = resolve_reference(&args, &config)?;
    let engine = ProximityEngine::new(config).context("Invalid engine configuration")?;
    let survey = engine
        .survey(reference, args.seed)
        .context("Failed to run proximity survey")?;

    let first_radius = engine.config().band_radii_meters.first();
    if let (Some(first), Some(count)) = (first_radius, survey.primary_count()) {
        info!(
            "The number of locations within a {:.0}m radius of the address is {}.",
            first, count
        );
    }

    if let Some(index) = args.select {
        let house = survey.candidate(index).context("Invalid --select")?;
        let request = DirectionsRequest::to_candidate(reference, house);
        info!(
            "Directions request: house #{} at {} → address ({:.0}m straight line)",
            index,
            house.location(),
            house.distance_meters()
        );
        eprintln!("{}", serde_json::to_string_pretty(&request)?);
    }

    let json = serde_json::to_string_pretty(&survey).context("Failed to serialize survey")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write survey to {}", path.display()))?;
            info!("Survey {} written to {}", survey.run_id, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn resolve_reference(args: &SurveyArgs, config: &EngineConfig) -> Result<Coordinate> {
    if let Some(address) = &args.address {
        let Some(path) = &args.gazetteer else {
            bail!("--address requires --gazetteer to resolve it");
        };
        let resolver = GazetteerResolver::from_file(path).context("Failed to load gazetteer")?;
        let coordinate = resolver
            .resolve(address)
            .with_context(|| format!("Failed to resolve address '{}'", address))?;
        info!("Resolved '{}' to {}", address, coordinate);
        return Ok(coordinate);
    }

    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)?),
        (None, None) => {
            warn!(
                "No address given, surveying the default centre ({}, {})",
                config.default_lat, config.default_lng
            );
            Coordinate::new(config.default_lat, config.default_lng)
                .context("Default centre is not a valid coordinate")
        }
        _ => bail!("--lat and --lng must be given together"),
    }
}
