//! Application constants for NEO explorer
//!
//! This module contains the upstream NASA CSV schema field names, the
//! filterable field and operator tokens, and default values used
//! throughout the application.

// =============================================================================
// Upstream CSV Schema Field Names
// =============================================================================

/// Column names of the NASA NEO close-approach CSV feed.
///
/// These names are fixed by the upstream data schema and are preserved
/// verbatim as keys; the loader deserializes rows against them directly.
pub mod csv_fields {
    pub const ID: &str = "id";
    pub const NEO_REFERENCE_ID: &str = "neo_reference_id";
    pub const NAME: &str = "name";
    pub const NASA_JPL_URL: &str = "nasa_jpl_url";
    pub const ABSOLUTE_MAGNITUDE_H: &str = "absolute_magnitude_h";
    pub const EST_DIA_MIN_KM: &str = "estimated_diameter_min_kilometers";
    pub const EST_DIA_MAX_KM: &str = "estimated_diameter_max_kilometers";
    pub const IS_HAZARDOUS: &str = "is_potentially_hazardous_asteroid";
    pub const KM_PER_SECOND: &str = "kilometers_per_second";
    pub const KM_PER_HOUR: &str = "kilometers_per_hour";
    pub const CLOSE_APPROACH_DATE: &str = "close_approach_date";
    pub const CLOSE_APPROACH_DATE_FULL: &str = "close_approach_date_full";
    pub const MISS_DISTANCE_ASTRONOMICAL: &str = "miss_distance_astronomical";
    pub const MISS_DISTANCE_LUNAR: &str = "miss_distance_lunar";
    pub const MISS_DISTANCE_KM: &str = "miss_distance_kilometers";
    pub const MISS_DISTANCE_MILES: &str = "miss_distance_miles";
}

// =============================================================================
// Filter Expression Tokens
// =============================================================================

/// Field names accepted in `field:operator:value` filter expressions
pub mod filter_fields {
    pub const HAZARDOUS: &str = "is_hazardous";
    pub const DIAMETER: &str = "diameter";
    pub const DISTANCE: &str = "distance";

    /// All recognized filter field names
    pub const ALL: &[&str] = &[HAZARDOUS, DIAMETER, DISTANCE];
}

/// Comparison operator symbols accepted in filter expressions
pub const FILTER_OPERATORS: &[&str] = &["=", "<", ">", "<=", ">="];

// =============================================================================
// Date Handling
// =============================================================================

/// Short-form approach date format, used as the date index key.
///
/// Fixed-width ISO format keeps lexicographic order identical to
/// chronological order.
pub const APPROACH_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Defaults
// =============================================================================

/// Default input data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/neo_data.csv";

/// Default output file for CSV-formatted results
pub const DEFAULT_RESULTS_FILE: &str = "results.csv";
