//! Query specification building and validation
//!
//! Raw query inputs - a single date or a start/end pair, optional filter
//! expressions, a result cap, and an output shape - are validated and
//! normalized here into an immutable [`QueryDescriptor`]. Contradictory or
//! incomplete date inputs are rejected at build time; the search engine
//! never sees a partially resolved query.

use crate::app::services::filter_engine::{self, FilterSpec};
use crate::constants::APPROACH_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::debug;

/// Date-search mode of a resolved query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSearch {
    /// All approaches on exactly this date
    Equals(String),
    /// All approaches with date in `[start, end]`, inclusive
    Between { start: String, end: String },
}

/// Result-count cap of a resolved query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Return every surviving result
    Unlimited,
    /// Return the first `n` surviving results
    Count(usize),
}

/// Shape of the result sequence a query produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputShape {
    /// Deduplicated near-Earth objects owning the surviving approaches
    Neo,
    /// The surviving close-approach events themselves
    Approach,
}

/// A fully resolved, validated search request
///
/// Immutable once built; accessors expose the resolved parts.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    date_search: DateSearch,
    filters: Vec<FilterSpec>,
    limit: Limit,
    shape: OutputShape,
}

impl QueryDescriptor {
    /// The resolved date-search mode
    pub fn date_search(&self) -> &DateSearch {
        &self.date_search
    }

    /// The active filter predicates (AND composition)
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    /// The result-count cap
    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// The requested output shape
    pub fn shape(&self) -> OutputShape {
        self.shape
    }
}

/// Builder collecting raw query inputs
///
/// # Examples
/// ```
/// use neo_explorer::app::services::query_builder::{OutputShape, QueryBuilder};
///
/// let query = QueryBuilder::new(OutputShape::Approach)
///     .start_date(Some("2020-01-01".to_string()))
///     .end_date(Some("2020-01-10".to_string()))
///     .filters(vec!["is_hazardous:=:True".to_string()])
///     .limit(Some(10))
///     .build()
///     .unwrap();
/// assert_eq!(query.filters().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    filter_expressions: Vec<String>,
    limit: Option<usize>,
    shape: Option<OutputShape>,
}

impl QueryBuilder {
    /// Create a builder for the given output shape
    pub fn new(shape: OutputShape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::default()
        }
    }

    /// Set the exact-date input
    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    /// Set the range start input
    pub fn start_date(mut self, start_date: Option<String>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Set the range end input
    pub fn end_date(mut self, end_date: Option<String>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Set the raw filter expressions
    pub fn filters(mut self, expressions: Vec<String>) -> Self {
        self.filter_expressions = expressions;
        self
    }

    /// Set the result-count cap. `None` and zero both mean unlimited.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Resolve the collected inputs into an immutable query descriptor
    ///
    /// # Errors
    /// * `UnsupportedQuery` when an exact date and a range bound are supplied
    ///   together (ambiguous - rejected, never resolved by priority), when a
    ///   range is missing one bound, when no date input is supplied at all,
    ///   or when a supplied date is not valid `YYYY-MM-DD`
    /// * `UnsupportedFeature` for unrecognized filter fields or operators
    pub fn build(self) -> Result<QueryDescriptor> {
        let date_search = match (self.date, self.start_date, self.end_date) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(Error::unsupported_query(
                    "an exact date and a date range cannot be combined".to_string(),
                ));
            }
            (Some(date), None, None) => DateSearch::Equals(validate_date(date)?),
            (None, Some(start), Some(end)) => DateSearch::Between {
                start: validate_date(start)?,
                end: validate_date(end)?,
            },
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(Error::unsupported_query(
                    "a date range requires both a start and an end date".to_string(),
                ));
            }
            (None, None, None) => {
                return Err(Error::unsupported_query(
                    "either an exact date or a start/end date pair is required".to_string(),
                ));
            }
        };

        let filters: Vec<FilterSpec> = filter_engine::parse_filters(&self.filter_expressions)?
            .into_values()
            .collect();

        // A zero cap and an absent cap both mean "no cap"
        let limit = match self.limit {
            None | Some(0) => Limit::Unlimited,
            Some(n) => Limit::Count(n),
        };

        let shape = self.shape.unwrap_or(OutputShape::Neo);

        debug!(
            "Resolved query: {:?}, {} filter(s), {:?}, shape {:?}",
            date_search,
            filters.len(),
            limit,
            shape
        );

        Ok(QueryDescriptor {
            date_search,
            filters,
            limit,
            shape,
        })
    }
}

/// Validate a query date input against the short index-key format
fn validate_date(date: String) -> Result<String> {
    NaiveDate::parse_from_str(&date, APPROACH_DATE_FORMAT).map_err(|_| {
        Error::unsupported_query(format!("'{date}' is not a valid YYYY-MM-DD date"))
    })?;
    Ok(date)
}
