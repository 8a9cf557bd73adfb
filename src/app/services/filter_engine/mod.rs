//! Filter parsing and application for close-approach queries
//!
//! Textual `field:operator:value` expressions are parsed into typed filter
//! specs up front: the field resolves to an enumerated accessor and the value
//! is coerced to the field's semantic type at parse time, so applying a
//! filter is a plain typed comparison with no per-candidate string handling.

use crate::app::models::CloseApproach;
use crate::constants::{filter_fields, FILTER_OPERATORS};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Fields a filter expression may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Hazard classification of the owning object
    Hazardous,
    /// Minimum estimated diameter in kilometers
    Diameter,
    /// Miss distance in kilometers
    Distance,
}

impl FilterField {
    /// Resolve a textual field name from a filter expression
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            filter_fields::HAZARDOUS => Ok(Self::Hazardous),
            filter_fields::DIAMETER => Ok(Self::Diameter),
            filter_fields::DISTANCE => Ok(Self::Distance),
            other => Err(Error::unsupported_feature(format!(
                "unknown filter field '{}': expected one of {}",
                other,
                filter_fields::ALL.join(", ")
            ))),
        }
    }

    /// Extract this field's value from a candidate event
    fn extract(self, approach: &CloseApproach) -> FilterValue {
        match self {
            Self::Hazardous => FilterValue::Bool(approach.is_hazardous),
            Self::Diameter => FilterValue::Number(approach.est_diameter_min_km),
            Self::Distance => FilterValue::Number(approach.miss_distance_kilometers),
        }
    }

    /// Parse a raw comparison value into this field's semantic type
    fn parse_value(self, raw: &str) -> Result<FilterValue> {
        match self {
            Self::Hazardous => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(FilterValue::Bool(true)),
                "false" => Ok(FilterValue::Bool(false)),
                other => Err(Error::unsupported_feature(format!(
                    "invalid hazard filter value '{other}': expected True or False"
                ))),
            },
            Self::Diameter | Self::Distance => {
                raw.trim().parse::<f64>().map(FilterValue::Number).map_err(|_| {
                    Error::unsupported_feature(format!(
                        "invalid numeric filter value '{raw}' for field {self}"
                    ))
                })
            }
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Hazardous => filter_fields::HAZARDOUS,
            Self::Diameter => filter_fields::DIAMETER,
            Self::Distance => filter_fields::DISTANCE,
        };
        write!(f, "{token}")
    }
}

/// Comparison operators supported in filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    /// Resolve an operator symbol from a filter expression
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        match symbol {
            "=" => Ok(Self::Eq),
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            "<=" => Ok(Self::Le),
            ">=" => Ok(Self::Ge),
            other => Err(Error::unsupported_feature(format!(
                "unknown filter operator '{}': expected one of {}",
                other,
                FILTER_OPERATORS.join(", ")
            ))),
        }
    }

    /// Whether an ordering between candidate and comparison value satisfies
    /// this operator. `None` (incomparable, e.g. NaN) never matches.
    fn matches(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return false;
        };
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::Lt => ordering == Ordering::Less,
            Self::Gt => ordering == Ordering::Greater,
            Self::Le => ordering != Ordering::Greater,
            Self::Ge => ordering != Ordering::Less,
        }
    }
}

/// A comparison value coerced to its field's semantic type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Number(f64),
}

impl FilterValue {
    fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(&b)),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

/// One parsed field/operator/value predicate
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub field: FilterField,
    pub op: CompareOp,
    pub value: FilterValue,
}

impl FilterSpec {
    /// Whether a single candidate satisfies this predicate
    pub fn matches(&self, approach: &CloseApproach) -> bool {
        self.op
            .matches(self.field.extract(approach).partial_cmp(self.value))
    }

    /// Apply this predicate to a candidate list, preserving order
    pub fn apply(&self, candidates: Vec<CloseApproach>) -> Vec<CloseApproach> {
        candidates
            .into_iter()
            .filter(|approach| self.matches(approach))
            .collect()
    }
}

/// Parse raw `field:operator:value` expressions into filter specs
///
/// Duplicate filters on the same field are collapsed to the last one
/// supplied. Unknown fields, unknown operators, and values that do not parse
/// in the field's type are rejected with `UnsupportedFeature`.
pub fn parse_filters(expressions: &[String]) -> Result<HashMap<FilterField, FilterSpec>> {
    let mut filters = HashMap::new();

    for expression in expressions {
        let mut parts = expression.splitn(3, ':');
        let (Some(field_token), Some(op_symbol), Some(raw_value)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::unsupported_feature(format!(
                "malformed filter expression '{expression}': expected field:operator:value"
            )));
        };

        let field = FilterField::from_token(field_token)?;
        let op = CompareOp::from_symbol(op_symbol)?;
        let value = field.parse_value(raw_value)?;

        if let Some(previous) = filters.insert(field, FilterSpec { field, op, value }) {
            debug!(
                "Duplicate filter on field {} - replacing {:?}",
                field, previous
            );
        }
    }

    Ok(filters)
}
