//! Catalog metadata and load statistics tracking

use std::path::PathBuf;
use std::time::Duration;

/// Statistics about the catalog loading process
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of CSV rows read from the data file
    pub rows_read: usize,

    /// Number of distinct objects created
    pub neos_created: usize,

    /// Number of close approaches indexed
    pub approaches_indexed: usize,

    /// Number of rows rejected during validation
    pub rows_rejected: usize,

    /// Time taken to load the catalog
    pub load_duration: Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Loading rate in rows per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.rows_read as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// One-line summary for log output
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} objects, {} approaches ({} rejected) in {:.2}s",
            self.rows_read,
            self.neos_created,
            self.approaches_indexed,
            self.rows_rejected,
            self.load_duration.as_secs_f64()
        )
    }
}

/// Snapshot of catalog contents after loading
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Path of the data file the catalog was loaded from, if any
    pub source_path: Option<PathBuf>,

    /// Number of distinct objects
    pub neo_count: usize,

    /// Total number of close approaches
    pub approach_count: usize,

    /// Number of objects classified as potentially hazardous
    pub hazardous_neos: usize,

    /// Earliest approach date in the index
    pub first_date: Option<String>,

    /// Latest approach date in the index
    pub last_date: Option<String>,
}
