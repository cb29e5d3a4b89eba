use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tile_data::rooms;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Estimate tiles and boxes for every room listed in a CSV file.
///
/// The CSV file should have the following columns:
/// - name: Free-text room name
/// - tile_type: floor or wall
/// - area: Area to cover, at least 1.0
/// - unit: sqft or sqm
/// - tile_size: 12x12, 24x24, 18x12 or 36x18
#[derive(Parser, Debug)]
#[command(name = "tile-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file listing the rooms
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let rooms = rooms::load_from_file(&args.file)
        .with_context(|| format!("Failed to load rooms from: {}", args.file.display()))?;
    debug!(count = rooms.len(), "loaded rooms");

    let estimates = rooms::estimate_rooms(&rooms).context("Failed to estimate rooms")?;

    for estimate in &estimates {
        let room = &estimate.room;
        println!(
            "{:<20} {:<5} {:>10} {:<7} {:>5} tiles {:>4} boxes",
            room.name,
            room.tile_type.as_str(),
            room.area.to_string(),
            room.tile_size.label(),
            estimate.result.tiles,
            estimate.result.boxes,
        );
    }

    let total = rooms::total_estimate(&estimates).context("Totals are too large to represent")?;
    println!(
        "{} rooms: {} tiles, {} boxes (including 10% buffer)",
        estimates.len(),
        total.tiles,
        total.boxes
    );

    Ok(())
}
