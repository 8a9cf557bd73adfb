//! Data models for NEO close-approach processing
//!
//! This module contains the core data structures for representing near-Earth
//! objects and their recorded close approaches, following the NASA NEO feed
//! schema.

use crate::constants::APPROACH_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Near-Earth Object (aggregate)
// =============================================================================

/// Static attributes of a near-Earth object, fixed at first registration.
///
/// Bundles the per-object fields that every input row carries so the catalog
/// can create the aggregate on first encounter of a name and ignore the
/// copies on subsequent rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoAttributes {
    /// NASA identifier for this object
    pub id: String,

    /// NEO reference identifier (usually equal to `id`)
    pub neo_reference_id: String,

    /// Object designation - the unique key for catalog lookups
    pub name: String,

    /// JPL small-body database URL for this object
    pub nasa_jpl_url: String,

    /// Absolute magnitude (H)
    pub absolute_magnitude_h: f64,

    /// Minimum estimated diameter in kilometers
    pub est_diameter_min_km: f64,

    /// Maximum estimated diameter in kilometers
    pub est_diameter_max_km: f64,

    /// Whether NASA classifies the object as potentially hazardous
    pub is_hazardous: bool,
}

/// One tracked near-Earth object and all of its recorded close approaches
///
/// An object is created on the first row that mentions its name; every later
/// row for the same name appends to `approaches`. The approach list keeps
/// ingestion order, which is not necessarily chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// NASA identifier for this object
    pub id: String,

    /// NEO reference identifier
    pub neo_reference_id: String,

    /// Object designation - the unique key for catalog lookups
    pub name: String,

    /// JPL small-body database URL for this object
    pub nasa_jpl_url: String,

    /// Absolute magnitude (H)
    pub absolute_magnitude_h: f64,

    /// Minimum estimated diameter in kilometers
    pub est_diameter_min_km: f64,

    /// Maximum estimated diameter in kilometers
    pub est_diameter_max_km: f64,

    /// Whether NASA classifies the object as potentially hazardous
    pub is_hazardous: bool,

    /// Close approaches recorded for this object, in ingestion order
    pub approaches: Vec<CloseApproach>,
}

impl NearEarthObject {
    /// Create a new object from its static attributes, with validation
    pub fn new(attributes: NeoAttributes) -> Result<Self> {
        let neo = Self {
            id: attributes.id,
            neo_reference_id: attributes.neo_reference_id,
            name: attributes.name,
            nasa_jpl_url: attributes.nasa_jpl_url,
            absolute_magnitude_h: attributes.absolute_magnitude_h,
            est_diameter_min_km: attributes.est_diameter_min_km,
            est_diameter_max_km: attributes.est_diameter_max_km,
            is_hazardous: attributes.is_hazardous,
            approaches: Vec::new(),
        };

        neo.validate()?;
        Ok(neo)
    }

    /// Validate object data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "object name cannot be empty".to_string(),
            ));
        }

        if self.est_diameter_min_km < 0.0 || self.est_diameter_max_km < 0.0 {
            return Err(Error::data_validation(format!(
                "estimated diameters must be non-negative, got {} / {}",
                self.est_diameter_min_km, self.est_diameter_max_km
            )));
        }

        if self.est_diameter_min_km > self.est_diameter_max_km {
            return Err(Error::data_validation(format!(
                "minimum estimated diameter {} exceeds maximum {}",
                self.est_diameter_min_km, self.est_diameter_max_km
            )));
        }

        Ok(())
    }

    /// Append a close approach to this object's collection
    pub fn record_approach(&mut self, approach: CloseApproach) {
        self.approaches.push(approach);
    }

    /// Static attributes of this object, without the approach collection
    pub fn attributes(&self) -> NeoAttributes {
        NeoAttributes {
            id: self.id.clone(),
            neo_reference_id: self.neo_reference_id.clone(),
            name: self.name.clone(),
            nasa_jpl_url: self.nasa_jpl_url.clone(),
            absolute_magnitude_h: self.absolute_magnitude_h,
            est_diameter_min_km: self.est_diameter_min_km,
            est_diameter_max_km: self.est_diameter_max_km,
            is_hazardous: self.is_hazardous,
        }
    }

    /// Full timestamps of all recorded approaches, in ingestion order
    pub fn approach_dates(&self) -> Vec<&str> {
        self.approaches
            .iter()
            .map(|a| a.close_approach_date_full.as_str())
            .collect()
    }

    /// Miss distances in kilometers of all recorded approaches, in ingestion order
    pub fn miss_distances_km(&self) -> Vec<f64> {
        self.approaches
            .iter()
            .map(|a| a.miss_distance_kilometers)
            .collect()
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id = {}", self.id)?;
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "absolute magnitude (h) = {}", self.absolute_magnitude_h)?;
        writeln!(f, "est. diameter min (km) = {}", self.est_diameter_min_km)?;
        writeln!(f, "est. diameter max (km) = {}", self.est_diameter_max_km)?;
        writeln!(f, "is hazardous = {}", self.is_hazardous)?;
        writeln!(f, "approach dates = {:?}", self.approach_dates())?;
        write!(f, "miss distances (km) = {:?}", self.miss_distances_km())
    }
}

// =============================================================================
// Close Approach (event)
// =============================================================================

/// One recorded close approach of a near-Earth object
///
/// Each event carries its own copy of the owning object's hazard flag and
/// diameter bounds, denormalized at construction time, so filters evaluate
/// against the event alone without a join back to the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// Designation of the owning object - a lookup key into the name index,
    /// never an ownership edge
    pub neo_name: String,

    /// Approach date in short `YYYY-MM-DD` form, used as the date index key
    pub close_approach_date: String,

    /// Approach timestamp in the upstream full form (e.g. "2020-Jan-01 12:30")
    pub close_approach_date_full: String,

    /// Relative velocity in kilometers per second
    pub kilometers_per_second: f64,

    /// Relative velocity in kilometers per hour
    pub kilometers_per_hour: f64,

    /// Miss distance in astronomical units
    pub miss_distance_astronomical: f64,

    /// Miss distance in lunar distances
    pub miss_distance_lunar: f64,

    /// Miss distance in kilometers
    pub miss_distance_kilometers: f64,

    /// Miss distance in miles
    pub miss_distance_miles: f64,

    /// Minimum estimated diameter of the owning object, in kilometers
    pub est_diameter_min_km: f64,

    /// Maximum estimated diameter of the owning object, in kilometers
    pub est_diameter_max_km: f64,

    /// Hazard classification of the owning object
    pub is_hazardous: bool,
}

impl CloseApproach {
    /// Validate event data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.neo_name.trim().is_empty() {
            return Err(Error::data_validation(
                "close approach must reference a non-empty object name".to_string(),
            ));
        }

        // The short date is the index key; it must parse in the fixed format
        NaiveDate::parse_from_str(&self.close_approach_date, APPROACH_DATE_FORMAT).map_err(
            |source| {
                Error::date_parsing(
                    format!(
                        "close approach date '{}' is not in {} form",
                        self.close_approach_date, APPROACH_DATE_FORMAT
                    ),
                    source,
                )
            },
        )?;

        if self.kilometers_per_second < 0.0 || self.kilometers_per_hour < 0.0 {
            return Err(Error::data_validation(format!(
                "relative velocity must be non-negative, got {} km/s / {} km/h",
                self.kilometers_per_second, self.kilometers_per_hour
            )));
        }

        if self.miss_distance_astronomical < 0.0
            || self.miss_distance_lunar < 0.0
            || self.miss_distance_kilometers < 0.0
            || self.miss_distance_miles < 0.0
        {
            return Err(Error::data_validation(
                "miss distances must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name = {}", self.neo_name)?;
        writeln!(f, "approach date = {}", self.close_approach_date_full)?;
        writeln!(f, "miss distance (km) = {}", self.miss_distance_kilometers)?;
        writeln!(f, "km per hour = {}", self.kilometers_per_hour)?;
        writeln!(f, "est. diameter min (km) = {}", self.est_diameter_min_km)?;
        writeln!(f, "est. diameter max (km) = {}", self.est_diameter_max_km)?;
        write!(f, "is hazardous = {}", self.is_hazardous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_attributes() -> NeoAttributes {
        NeoAttributes {
            id: "3726710".to_string(),
            neo_reference_id: "3726710".to_string(),
            name: "(2015 RC)".to_string(),
            nasa_jpl_url: "https://ssd.jpl.nasa.gov/sbdb.cgi?sstr=3726710".to_string(),
            absolute_magnitude_h: 24.3,
            est_diameter_min_km: 0.0334,
            est_diameter_max_km: 0.0747,
            is_hazardous: false,
        }
    }

    fn create_test_approach() -> CloseApproach {
        CloseApproach {
            neo_name: "(2015 RC)".to_string(),
            close_approach_date: "2020-01-01".to_string(),
            close_approach_date_full: "2020-Jan-01 12:30".to_string(),
            kilometers_per_second: 19.49,
            kilometers_per_hour: 70164.9,
            miss_distance_astronomical: 0.0269,
            miss_distance_lunar: 10.46,
            miss_distance_kilometers: 4027630.5,
            miss_distance_miles: 2502859.8,
            est_diameter_min_km: 0.0334,
            est_diameter_max_km: 0.0747,
            is_hazardous: false,
        }
    }

    mod neo_tests {
        use super::*;

        #[test]
        fn test_neo_creation_valid() {
            let neo = NearEarthObject::new(create_test_attributes()).unwrap();
            assert_eq!(neo.name, "(2015 RC)");
            assert!(neo.approaches.is_empty());
            assert!(neo.validate().is_ok());
        }

        #[test]
        fn test_neo_empty_name_rejected() {
            let mut attrs = create_test_attributes();
            attrs.name = "  ".to_string();
            assert!(NearEarthObject::new(attrs).is_err());
        }

        #[test]
        fn test_neo_diameter_validation() {
            let mut attrs = create_test_attributes();
            attrs.est_diameter_min_km = 0.5;
            attrs.est_diameter_max_km = 0.1;
            assert!(NearEarthObject::new(attrs).is_err());

            let mut attrs = create_test_attributes();
            attrs.est_diameter_min_km = -0.1;
            assert!(NearEarthObject::new(attrs).is_err());
        }

        #[test]
        fn test_record_approach_keeps_order() {
            let mut neo = NearEarthObject::new(create_test_attributes()).unwrap();

            let mut first = create_test_approach();
            first.close_approach_date = "2020-02-01".to_string();
            let mut second = create_test_approach();
            second.close_approach_date = "2020-01-01".to_string();

            // Ingestion order, not chronological order
            neo.record_approach(first);
            neo.record_approach(second);

            assert_eq!(neo.approaches.len(), 2);
            assert_eq!(neo.approaches[0].close_approach_date, "2020-02-01");
            assert_eq!(neo.approaches[1].close_approach_date, "2020-01-01");
        }

        #[test]
        fn test_approach_accessors() {
            let mut neo = NearEarthObject::new(create_test_attributes()).unwrap();
            neo.record_approach(create_test_approach());

            assert_eq!(neo.approach_dates(), vec!["2020-Jan-01 12:30"]);
            assert_eq!(neo.miss_distances_km(), vec![4027630.5]);
        }

        #[test]
        fn test_attributes_round_trip() {
            let attrs = create_test_attributes();
            let neo = NearEarthObject::new(attrs.clone()).unwrap();
            assert_eq!(neo.attributes(), attrs);
        }
    }

    mod approach_tests {
        use super::*;

        #[test]
        fn test_approach_valid() {
            assert!(create_test_approach().validate().is_ok());
        }

        #[test]
        fn test_approach_bad_date_rejected() {
            let mut approach = create_test_approach();
            approach.close_approach_date = "01/01/2020".to_string();
            assert!(approach.validate().is_err());

            approach.close_approach_date = "2020-13-40".to_string();
            assert!(approach.validate().is_err());
        }

        #[test]
        fn test_approach_empty_name_rejected() {
            let mut approach = create_test_approach();
            approach.neo_name = "".to_string();
            assert!(approach.validate().is_err());
        }

        #[test]
        fn test_approach_negative_distance_rejected() {
            let mut approach = create_test_approach();
            approach.miss_distance_kilometers = -1.0;
            assert!(approach.validate().is_err());
        }

        #[test]
        fn test_approach_negative_velocity_rejected() {
            let mut approach = create_test_approach();
            approach.kilometers_per_second = -0.5;
            assert!(approach.validate().is_err());
        }
    }

    #[test]
    fn test_display_includes_key_fields() {
        let mut neo = NearEarthObject::new(create_test_attributes()).unwrap();
        neo.record_approach(create_test_approach());

        let rendered = neo.to_string();
        assert!(rendered.contains("name = (2015 RC)"));
        assert!(rendered.contains("is hazardous = false"));
        assert!(rendered.contains("2020-Jan-01 12:30"));

        let rendered = create_test_approach().to_string();
        assert!(rendered.contains("miss distance (km) = 4027630.5"));
    }
}
