//! Info command implementation
//!
//! Loads the catalog and prints a summary report of its contents.

use super::shared::setup_logging;
use crate::app::services::catalog::NeoCatalog;
use crate::cli::args::InfoArgs;
use crate::Result;
use colored::Colorize;
use tracing::info;

/// Info command runner
pub fn run_info(args: InfoArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    args.validate()?;

    let (catalog, load_stats) = NeoCatalog::load_from_csv(&args.data_file, true)?;
    info!("Catalog loaded: {}", load_stats.summary());

    let metadata = catalog.metadata();

    println!("{}", "Close-Approach Catalog".bold());
    println!("======================");
    if let Some(source) = &metadata.source_path {
        println!("data file:          {}", source.display());
    }
    println!("objects:            {}", metadata.neo_count);
    println!("close approaches:   {}", metadata.approach_count);
    println!(
        "hazardous objects:  {} ({:.1}%)",
        metadata.hazardous_neos,
        if metadata.neo_count == 0 {
            0.0
        } else {
            metadata.hazardous_neos as f64 / metadata.neo_count as f64 * 100.0
        }
    );
    match (&metadata.first_date, &metadata.last_date) {
        (Some(first), Some(last)) => println!("date span:          {first} to {last}"),
        _ => println!("date span:          (empty)"),
    }

    Ok(())
}
