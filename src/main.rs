use crate::airport::AirportId;
use crate::catalog::Catalog;
use crate::cli::Args;
use crate::constraints::SearchConstraints;
use crate::itinerary::Trip;
use crate::render::RenderError;
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod airport;
mod catalog;
mod cli;
mod constraints;
mod flight;
mod itinerary;
mod render;
mod search;
mod time;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();
}

fn report<T: Trip + Serialize>(trips: &[T], args: &Args) -> Result<(), RenderError> {
    render::print_trips(trips);
    if args.file {
        render::write_json(trips, &args.output)?;
        println!("Saved results to {}", args.output.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let constraints = SearchConstraints::try_from(&args)?;
    let catalog = Catalog::load_from_file(&args.csv_file_path)?;
    if catalog.is_empty() {
        warn!("No valid flights in {}", args.csv_file_path.display());
    }
    info!("Loaded {} flights from {}", catalog.len(), args.csv_file_path.display());

    let origin: AirportId = Arc::from(args.origin.as_str());
    let destination: AirportId = Arc::from(args.destination.as_str());

    if args.round_trip {
        let trips = search::round_trip(&catalog, &constraints, origin, destination)?;
        report(&trips, &args)?;
    } else {
        let itineraries = search::one_way(&catalog, &constraints, origin, destination)?;
        report(&itineraries, &args)?;
    }
    Ok(())
}
