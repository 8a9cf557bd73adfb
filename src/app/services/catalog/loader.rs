//! Catalog loading from the NASA NEO close-approach CSV feed
//!
//! The loader streams rows through serde deserialization against the
//! upstream column names, splitting each row into the event record and the
//! owning object's static attributes, and registers both with the catalog
//! in a single step.

use super::metadata::LoadStats;
use super::NeoCatalog;
use crate::app::models::{CloseApproach, NeoAttributes};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// One raw row of the upstream CSV feed
///
/// Field names match the upstream schema verbatim; serde maps columns by
/// header name. Every row denormalizes the owning object's attributes, so
/// the same struct yields both the event and the aggregate's fields.
#[derive(Debug, Deserialize)]
struct RawApproachRow {
    id: String,
    neo_reference_id: String,
    name: String,
    nasa_jpl_url: String,
    absolute_magnitude_h: f64,
    estimated_diameter_min_kilometers: f64,
    estimated_diameter_max_kilometers: f64,
    is_potentially_hazardous_asteroid: String,
    kilometers_per_second: f64,
    kilometers_per_hour: f64,
    close_approach_date: String,
    close_approach_date_full: String,
    miss_distance_astronomical: f64,
    miss_distance_lunar: f64,
    miss_distance_kilometers: f64,
    miss_distance_miles: f64,
}

impl RawApproachRow {
    fn into_parts(self) -> Result<(CloseApproach, NeoAttributes)> {
        let is_hazardous = parse_hazard_flag(&self.is_potentially_hazardous_asteroid)?;

        let attributes = NeoAttributes {
            id: self.id,
            neo_reference_id: self.neo_reference_id,
            name: self.name.clone(),
            nasa_jpl_url: self.nasa_jpl_url,
            absolute_magnitude_h: self.absolute_magnitude_h,
            est_diameter_min_km: self.estimated_diameter_min_kilometers,
            est_diameter_max_km: self.estimated_diameter_max_kilometers,
            is_hazardous,
        };

        let approach = CloseApproach {
            neo_name: self.name,
            close_approach_date: self.close_approach_date,
            close_approach_date_full: self.close_approach_date_full,
            kilometers_per_second: self.kilometers_per_second,
            kilometers_per_hour: self.kilometers_per_hour,
            miss_distance_astronomical: self.miss_distance_astronomical,
            miss_distance_lunar: self.miss_distance_lunar,
            miss_distance_kilometers: self.miss_distance_kilometers,
            miss_distance_miles: self.miss_distance_miles,
            est_diameter_min_km: attributes.est_diameter_min_km,
            est_diameter_max_km: attributes.est_diameter_max_km,
            is_hazardous,
        };

        Ok((approach, attributes))
    }
}

/// Parse the upstream hazard flag text into a boolean
///
/// The feed writes Python-style `True`/`False`; accept either casing.
fn parse_hazard_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::data_validation(format!(
            "invalid hazard flag '{other}': expected True or False"
        ))),
    }
}

impl NeoCatalog {
    /// Load a catalog from a close-approach CSV file
    ///
    /// Builds both indices in one pass over the file. Rows that fail to
    /// deserialize or validate abort the load - a partially indexed catalog
    /// would silently drop query results.
    ///
    /// # Arguments
    /// * `path` - Path to the close-approach CSV file
    /// * `show_progress` - Whether to display a progress bar
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the data file does not exist
    /// * Returns `Error::CsvParsing` for malformed rows
    /// * Returns `Error::DataValidation` for rows with invalid field values
    pub fn load_from_csv(path: &Path, show_progress: bool) -> Result<(Self, LoadStats)> {
        info!("Loading close-approach catalog from {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let start_time = Instant::now();
        let mut catalog = Self::new();
        catalog.source_path = Some(path.to_path_buf());
        let mut stats = LoadStats::new();

        let mut reader = csv::Reader::from_path(path).map_err(|source| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open data file",
                Some(source),
            )
        })?;

        let progress_bar = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} rows {msg}")
                    .unwrap(),
            );
            pb.set_message("Loading close approaches...");
            Some(pb)
        } else {
            None
        };

        for (row_index, record) in reader.deserialize::<RawApproachRow>().enumerate() {
            let row = record.map_err(|source| {
                stats.rows_rejected += 1;
                Error::csv_parsing(
                    path.display().to_string(),
                    format!("malformed row {}", row_index + 1),
                    Some(source),
                )
            })?;

            stats.rows_read += 1;
            let known_before = catalog.neo_count();

            let (approach, attributes) = row.into_parts()?;
            catalog.register(approach, attributes)?;

            if catalog.neo_count() > known_before {
                stats.neos_created += 1;
            }
            stats.approaches_indexed += 1;

            if let Some(pb) = &progress_bar {
                pb.set_position(stats.rows_read as u64);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_and_clear();
        }

        stats.load_duration = start_time.elapsed();

        info!("Catalog loaded: {}", stats.summary());
        debug!(
            "Date index spans {:?} to {:?}",
            catalog.approaches_by_date.keys().next(),
            catalog.approaches_by_date.keys().next_back()
        );

        Ok((catalog, stats))
    }
}
