//! NEO Explorer Library
//!
//! A Rust library for indexing and querying NASA near-Earth object (NEO)
//! close-approach data.
//!
//! This library provides tools for:
//! - Loading close-approach records from the NASA NEO CSV feed
//! - Indexing records by object name and by approach date for O(1)/O(log n) lookups
//! - Building validated, immutable query descriptors from raw inputs
//! - Filtering candidates on hazard status, diameter, and miss distance
//! - Resolving exact-date and date-range searches with result projection
//! - Writing results to a human-readable display or a CSV file

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod filter_engine;
        pub mod query_builder;
        pub mod results_writer;
        pub mod searcher;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CloseApproach, NearEarthObject, NeoAttributes};
pub use app::services::catalog::NeoCatalog;
pub use app::services::query_builder::{
    DateSearch, Limit, OutputShape, QueryBuilder, QueryDescriptor,
};
pub use app::services::searcher::{NeoSearcher, SearchResults};

/// Result type alias for NEO explorer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading and query processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Malformed or contradictory query request
    #[error("unsupported query: {message}")]
    UnsupportedQuery { message: String },

    /// Unrecognized filter field or comparison operator
    #[error("unsupported feature: {message}")]
    UnsupportedFeature { message: String },

    /// Range endpoint not present in the date index
    #[error("range endpoint not found in date index: {date}")]
    RangeNotFound { date: String },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Date parsing error
    #[error("date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported query error
    pub fn unsupported_query(message: impl Into<String>) -> Self {
        Self::UnsupportedQuery {
            message: message.into(),
        }
    }

    /// Create an unsupported feature error
    pub fn unsupported_feature(message: impl Into<String>) -> Self {
        Self::UnsupportedFeature {
            message: message.into(),
        }
    }

    /// Create a range-not-found error for a missing endpoint
    pub fn range_not_found(date: impl Into<String>) -> Self {
        Self::RangeNotFound { date: date.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "date parsing failed".to_string(),
            source: error,
        }
    }
}
