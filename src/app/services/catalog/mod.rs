//! Catalog service holding the in-memory close-approach indices
//!
//! This module provides the record store built once at load time: a name
//! index mapping each object designation to its single aggregate instance,
//! and a date index mapping each approach date to the events recorded on
//! that day.

use crate::app::models::{CloseApproach, NearEarthObject, NeoAttributes};
use crate::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::warn;

pub mod loader;
pub mod metadata;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{CatalogMetadata, LoadStats};

/// In-memory catalog of near-Earth objects and their close approaches
///
/// The catalog maintains two indices populated together during ingestion:
/// object designations map to their single aggregate instance, and short
/// approach dates map to the ordered list of events observed on that date.
/// The date index is a `BTreeMap` keyed on fixed-width ISO dates, so key
/// order is chronological order. Read-only once loading completes.
#[derive(Debug, Clone, Default)]
pub struct NeoCatalog {
    /// Aggregate objects indexed by designation for O(1) lookups
    pub(crate) neos_by_name: HashMap<String, NearEarthObject>,

    /// Close approaches indexed by short date, per-date ingestion order preserved
    pub(crate) approaches_by_date: BTreeMap<String, Vec<CloseApproach>>,

    /// Path of the data file this catalog was loaded from, if any
    pub(crate) source_path: Option<PathBuf>,
}

impl NeoCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            neos_by_name: HashMap::new(),
            approaches_by_date: BTreeMap::new(),
            source_path: None,
        }
    }

    /// Register one close approach and the attributes of its owning object
    ///
    /// Looks up or creates the aggregate by name, appends the event to its
    /// collection, and appends the event to the date index under its short
    /// date key. Both indices are updated together - an event is never
    /// indexed without its aggregate being registered.
    ///
    /// Repeated registrations for the same name reuse the existing aggregate.
    /// Static attributes are first-wins; a mismatch on a later registration
    /// is logged and otherwise ignored.
    pub fn register(&mut self, approach: CloseApproach, attributes: NeoAttributes) -> Result<()> {
        approach.validate()?;

        match self.neos_by_name.get_mut(&attributes.name) {
            Some(existing) => {
                if existing.attributes() != attributes {
                    warn!(
                        "Conflicting attributes for object '{}' - keeping first registration",
                        attributes.name
                    );
                }
                existing.record_approach(approach.clone());
            }
            None => {
                let mut neo = NearEarthObject::new(attributes)?;
                neo.record_approach(approach.clone());
                self.neos_by_name.insert(neo.name.clone(), neo);
            }
        }

        self.approaches_by_date
            .entry(approach.close_approach_date.clone())
            .or_default()
            .push(approach);

        Ok(())
    }

    /// Get an object by designation (O(1) lookup)
    pub fn neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.neos_by_name.get(name)
    }

    /// Get the close approaches recorded on a date, in ingestion order
    ///
    /// A date with no recorded approaches yields an empty slice, not an error.
    pub fn approaches_on(&self, date: &str) -> &[CloseApproach] {
        self.approaches_by_date
            .get(date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether a date exists as a literal key in the date index
    pub fn contains_date(&self, date: &str) -> bool {
        self.approaches_by_date.contains_key(date)
    }

    /// All date keys in the index, in chronological order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.approaches_by_date.keys().map(String::as_str)
    }

    /// Number of distinct objects in the catalog
    pub fn neo_count(&self) -> usize {
        self.neos_by_name.len()
    }

    /// Total number of close approaches in the catalog
    pub fn approach_count(&self) -> usize {
        self.approaches_by_date.values().map(Vec::len).sum()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        let hazardous_neos = self
            .neos_by_name
            .values()
            .filter(|neo| neo.is_hazardous)
            .count();

        CatalogMetadata {
            source_path: self.source_path.clone(),
            neo_count: self.neo_count(),
            approach_count: self.approach_count(),
            hazardous_neos,
            first_date: self.approaches_by_date.keys().next().cloned(),
            last_date: self.approaches_by_date.keys().next_back().cloned(),
        }
    }
}
