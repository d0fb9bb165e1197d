//! transit-retrieve CLI
//!
//! Looks up the recommended route to a destination and prints the first two
//! public transport departure points with their distance and direction from
//! the current position.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod adapter;
mod config;
mod render;
mod url_param;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::RetrieveService;
use clap::{Args, Parser, Subcommand};
use domain::{Coordinate, Destination, TravelMode, distance_and_bearing};
use integration_directions::GoogleDirectionsClient;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapter::DirectionsAdapter,
    config::AppConfig,
    render::{OutputFormat, render_error, render_outcome},
    url_param::{DEFAULT_DEST_PARAM, destination_from_url},
};

/// transit-retrieve CLI
#[derive(Parser)]
#[command(name = "transit-retrieve")]
#[command(author, version, about = "Find public transport departure points towards a destination", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./transit-retrieve.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show departure points on the recommended route to a destination
    ///
    /// Example: transit-retrieve retrieve --dest "NW1 6XE" --position 51.5074,-0.1278
    Retrieve(RetrieveArgs),

    /// Print distance and compass direction between two coordinates
    Distance {
        /// Start coordinate as "lat,lon"
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,

        /// End coordinate as "lat,lon"
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },
}

#[derive(Args)]
struct RetrieveArgs {
    /// Destination: address, postcode or "lat,lon"
    #[arg(short, long, conflicts_with = "url", required_unless_present = "url")]
    dest: Option<String>,

    /// Launch URL carrying the destination as a query parameter
    #[arg(short, long)]
    url: Option<String>,

    /// Query parameter holding the destination in --url
    #[arg(long, default_value = DEFAULT_DEST_PARAM)]
    param: String,

    /// Current position as "lat,lon"
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["lat", "lon"])]
    position: Option<Coordinate>,

    /// Current latitude
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Current longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Travel mode (defaults to directions.default_mode)
    #[arg(short, long)]
    mode: Option<TravelMode>,

    /// Directions API key
    #[arg(long, env = "TRANSIT_RETRIEVE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format the output of the `distance` command
fn describe_distance(from: Coordinate, to: Coordinate) -> String {
    let measurement = distance_and_bearing(from, to);
    format!(
        "{} {} ({:.1}°)",
        measurement.distance_text(),
        measurement.direction,
        measurement.bearing_degrees
    )
}

/// Resolve the destination from --dest or --url
fn resolve_destination(args: &RetrieveArgs) -> anyhow::Result<Destination> {
    let text = match (&args.dest, &args.url) {
        (Some(dest), _) => dest.clone(),
        (None, Some(url)) => destination_from_url(url, &args.param)
            .with_context(|| format!("Invalid URL '{url}'"))?
            .with_context(|| {
                format!("Destination parameter '{}' not found in URL", args.param)
            })?,
        (None, None) => anyhow::bail!("Destination parameter '{}' not found in URL", args.param),
    };

    Ok(Destination::parse(&text)?)
}

/// Resolve the current position from the flags or the configured fallback
fn resolve_position(args: &RetrieveArgs, config: &AppConfig) -> anyhow::Result<Coordinate> {
    if let Some(position) = args.position {
        return Ok(position);
    }

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        return Ok(Coordinate::new(lat, lon)?);
    }

    config
        .location
        .position()
        .map_err(anyhow::Error::msg)?
        .context("Current position unavailable")
}

async fn run_retrieve(args: RetrieveArgs, config_path: Option<PathBuf>) -> anyhow::Result<String> {
    let mut config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    if let Some(api_key) = args.api_key.clone() {
        config.directions = config.directions.with_api_key(api_key);
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let destination = resolve_destination(&args)?;
    let position = resolve_position(&args, &config)?;
    let mode = match args.mode {
        Some(mode) => mode,
        None => config
            .directions
            .default_travel_mode()
            .map_err(anyhow::Error::msg)?,
    };

    info!(%destination, %position, %mode, "Retrieving departures");

    let client = GoogleDirectionsClient::new(&config.directions)?;
    let service = RetrieveService::new(Arc::new(DirectionsAdapter::new(Arc::new(client))));

    let outcome = service.retrieve(position, &destination, mode).await?;
    Ok(render_outcome(&outcome, args.format)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Retrieve(args) => match run_retrieve(args, cli.config).await {
            Ok(output) => println!("{output}"),
            Err(e) => {
                debug!(error = ?e, "Retrieve failed");
                eprintln!("{}", render_error(&e));
                std::process::exit(1);
            },
        },

        Commands::Distance { from, to } => {
            println!("{}", describe_distance(from, to));
        },
    }

    Ok(())
}
