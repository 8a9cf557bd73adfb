//! Result output formatting
//!
//! Writes an ordered result sequence either to stdout as human-readable
//! blocks or to a CSV file, with a field set per output shape. The writer
//! knows nothing about how the results were produced.

use crate::app::models::{CloseApproach, NearEarthObject};
use crate::app::services::searcher::SearchResults;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// CSV column set for object-shaped results
const NEO_FIELDNAMES: &[&str] = &[
    "id",
    "neo_reference_id",
    "name",
    "nasa_jpl_url",
    "absolute_magnitude_h",
    "estimated_diameter_min_km",
    "estimated_diameter_max_km",
    "is_potentially_hazardous",
    "approach_dates",
    "miss_distances_km",
];

/// CSV column set for approach-shaped results
const APPROACH_FIELDNAMES: &[&str] = &[
    "name",
    "close_approach_date",
    "close_approach_date_full",
    "kilometers_per_second",
    "kilometers_per_hour",
    "miss_distance_astronomical",
    "miss_distance_lunar",
    "miss_distance_km",
    "miss_distance_miles",
    "estimated_diameter_min_km",
    "estimated_diameter_max_km",
    "is_potentially_hazardous",
];

/// Print results to stdout, one block per result
pub fn display_results(results: &SearchResults) {
    if results.is_empty() {
        println!("{}", "No matching records found.".yellow());
        return;
    }

    match results {
        SearchResults::Approaches(approaches) => {
            for approach in approaches {
                println!("{approach}");
                println!("{}", hazard_note(approach.is_hazardous));
                println!();
            }
        }
        SearchResults::Neos(neos) => {
            for neo in neos {
                println!("{neo}");
                println!("{}", hazard_note(neo.is_hazardous));
                println!();
            }
        }
    }

    println!("{} result(s)", results.len());
}

fn hazard_note(is_hazardous: bool) -> String {
    if is_hazardous {
        "potentially hazardous".red().bold().to_string()
    } else {
        "not hazardous".green().to_string()
    }
}

/// Write results to a CSV file with the field set of the result shape
pub fn write_csv(results: &SearchResults, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| {
        Error::csv_parsing(
            path.display().to_string(),
            "failed to create results file",
            Some(source),
        )
    })?;

    match results {
        SearchResults::Neos(neos) => {
            writer.write_record(NEO_FIELDNAMES)?;
            for neo in neos {
                write_neo_record(&mut writer, neo)?;
            }
        }
        SearchResults::Approaches(approaches) => {
            writer.write_record(APPROACH_FIELDNAMES)?;
            for approach in approaches {
                write_approach_record(&mut writer, approach)?;
            }
        }
    }

    writer
        .flush()
        .map_err(|source| Error::io("failed to flush results file", source))?;

    info!("Wrote {} result(s) to {}", results.len(), path.display());
    Ok(())
}

fn write_neo_record<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    neo: &NearEarthObject,
) -> Result<()> {
    writer.write_record([
        neo.id.clone(),
        neo.neo_reference_id.clone(),
        neo.name.clone(),
        neo.nasa_jpl_url.clone(),
        neo.absolute_magnitude_h.to_string(),
        neo.est_diameter_min_km.to_string(),
        neo.est_diameter_max_km.to_string(),
        neo.is_hazardous.to_string(),
        neo.approach_dates().join("; "),
        neo.miss_distances_km()
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    ])?;
    Ok(())
}

fn write_approach_record<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    approach: &CloseApproach,
) -> Result<()> {
    writer.write_record([
        approach.neo_name.clone(),
        approach.close_approach_date.clone(),
        approach.close_approach_date_full.clone(),
        approach.kilometers_per_second.to_string(),
        approach.kilometers_per_hour.to_string(),
        approach.miss_distance_astronomical.to_string(),
        approach.miss_distance_lunar.to_string(),
        approach.miss_distance_kilometers.to_string(),
        approach.miss_distance_miles.to_string(),
        approach.est_diameter_min_km.to_string(),
        approach.est_diameter_max_km.to_string(),
        approach.is_hazardous.to_string(),
    ])?;
    Ok(())
}
