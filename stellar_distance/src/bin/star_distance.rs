//! Star distance command-line front end
//!
//! Loads a star descriptor file and prints the real distance between two of
//! its stars together with the derivation trace.
//!
//! # Usage
//!
//! ```bash
//! # First two stars of the file
//! cargo run --bin star-distance -- data/sample_pair.toml
//!
//! # Named stars (case-insensitive)
//! cargo run --bin star-distance -- data/sample_pair.json sirius betelgeuse
//!
//! # Machine-readable output
//! STAR_DISTANCE_FORMAT=json cargo run --bin star-distance -- data/sample_pair.toml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//! - `STAR_DISTANCE_FORMAT`: `text` (default) or `json`

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use stellar_distance::parsing::{parse_stars_file, select_pair};
use stellar_distance::services::{
    compute_between_checked_with, compute_between_with, validate_pair,
};
use stellar_distance::CalculatorConfig;

const USAGE: &str = "Usage: star-distance <stars-file> [<star-a> <star-b>]";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, names) = match args.split_first() {
        Some((path, names)) => (PathBuf::from(path), names),
        None => bail!("{}", USAGE),
    };

    let config = CalculatorConfig::load_or_default().context("Failed to load configuration")?;

    let stars = parse_stars_file(&path)?;
    info!("Loaded {} stars from {}", stars.len(), path.display());

    let (star_a, star_b) = select_pair(&stars, names).context(USAGE)?;

    let result = if config.validation.reject_invalid {
        compute_between_checked_with(star_a, star_b, &config.trace)?
    } else {
        let report = validate_pair(star_a, star_b);
        for issue in report.errors.iter().chain(&report.warnings) {
            warn!("{}", issue);
        }
        compute_between_with(star_a, star_b, &config.trace)
    };

    let as_json = env::var("STAR_DISTANCE_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if as_json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    for star in [star_a, star_b] {
        println!("{}", star);
        println!(
            "  distance: {:.4} pc ({:.2} ly)",
            star.distance_parsecs().value(),
            star.distance_light_years().value()
        );
    }
    println!();
    println!("Method: {}", result.method());
    println!();
    println!("{}", result.derivation());

    Ok(())
}
