#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the gun-trends toolchain.
//!
//! Loads a crime extract, runs the firearm classification pipeline, and
//! either dumps the classified set as JSON, prints aggregate statistics,
//! or exports map-ready heatmap points.

mod report;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use gun_trends_analytics::geo::BoundingBox;
use gun_trends_analytics::sample;
use gun_trends_classifier::{ClassificationOutcome, IncidentClassifier};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "gun_trends", about = "Firearm incident classification and reporting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an extract and write the firearm-related incidents as JSON
    Classify {
        /// Path to the crime extract CSV
        extract: PathBuf,
        /// Write JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print aggregate statistics over the classified set
    Stats {
        /// Path to the crime extract CSV
        extract: PathBuf,
        /// Number of rows to show in top-N tables
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Export heatmap points: bounding-box filtered, sampled lat/lng pairs
    Heatmap {
        /// Path to the crime extract CSV
        extract: PathBuf,
        /// Write JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Maximum number of points to emit
        #[arg(long, default_value_t = sample::RENDER_SAMPLE_CAP)]
        cap: usize,
        /// Sample seed (fixed for reproducible renders)
        #[arg(long, default_value_t = sample::RENDER_SAMPLE_SEED)]
        seed: u64,
        /// Southern bound, exclusive
        #[arg(long, default_value_t = BoundingBox::REGIONAL.min_lat)]
        min_lat: f64,
        /// Northern bound, exclusive
        #[arg(long, default_value_t = BoundingBox::REGIONAL.max_lat)]
        max_lat: f64,
        /// Western bound, exclusive
        #[arg(long, default_value_t = BoundingBox::REGIONAL.min_lng)]
        min_lng: f64,
        /// Eastern bound, exclusive
        #[arg(long, default_value_t = BoundingBox::REGIONAL.max_lng)]
        max_lng: f64,
    },
}

/// A single point for the map layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeatmapPoint {
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { extract, output } => {
            let outcome = classify_extract(&extract)?;
            log::info!(
                "{} firearm incidents ({} duplicates dropped)",
                outcome.incidents.len(),
                outcome.duplicates_dropped
            );
            write_json(output.as_deref(), &outcome.incidents)?;
        }
        Commands::Stats { extract, top } => {
            let outcome = classify_extract(&extract)?;
            report::print_stats(&outcome.incidents, top);
        }
        Commands::Heatmap {
            extract,
            output,
            cap,
            seed,
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        } => {
            let outcome = classify_extract(&extract)?;
            let bbox = BoundingBox {
                min_lat,
                max_lat,
                min_lng,
                max_lng,
            };
            let in_region = bbox.filter(&outcome.incidents);
            let sampled = sample::sample_for_rendering(&in_region, cap, seed);

            // bbox.filter only keeps incidents carrying both coordinates.
            let points: Vec<HeatmapPoint> = sampled
                .iter()
                .filter_map(|incident| {
                    Some(HeatmapPoint {
                        latitude: incident.latitude?,
                        longitude: incident.longitude?,
                    })
                })
                .collect();

            log::info!(
                "{} heatmap points ({} in region before sampling)",
                points.len(),
                in_region.len()
            );
            write_json(output.as_deref(), &points)?;
        }
    }

    Ok(())
}

/// Loads the extract and runs the classification pipeline over it.
fn classify_extract(extract: &Path) -> Result<ClassificationOutcome, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let records = gun_trends_ingest::load_extract(extract)?;
    let outcome = IncidentClassifier::with_default_keywords().classify(&records);
    log::info!(
        "Classified {} of {} records in {:?}",
        outcome.incidents.len(),
        records.len(),
        start.elapsed()
    );
    Ok(outcome)
}

/// Serializes `value` as pretty JSON to the given path, or stdout when no
/// path was given.
fn write_json<T: Serialize>(
    output: Option<&Path>,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
