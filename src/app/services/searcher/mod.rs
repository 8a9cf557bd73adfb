//! Search execution over the close-approach catalog
//!
//! Resolves a query descriptor against the catalog indices: gathers the
//! candidate events for the requested date or date range, applies the active
//! filters by intersection, truncates to the requested count, and projects
//! the survivors into the requested output shape.

use crate::app::models::{CloseApproach, NearEarthObject};
use crate::app::services::catalog::NeoCatalog;
use crate::app::services::query_builder::{DateSearch, Limit, OutputShape, QueryDescriptor};
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// The ordered result sequence of one search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Surviving close-approach events, unprojected
    Approaches(Vec<CloseApproach>),
    /// Owning objects of the surviving events, deduplicated by name in
    /// first-occurrence order
    Neos(Vec<NearEarthObject>),
}

impl SearchResults {
    /// Number of results in the sequence
    pub fn len(&self) -> usize {
        match self {
            Self::Approaches(approaches) => approaches.len(),
            Self::Neos(neos) => neos.len(),
        }
    }

    /// Whether the search produced no results
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search engine executing resolved queries against a loaded catalog
///
/// Queries never mutate the catalog; a searcher borrows it read-only.
#[derive(Debug)]
pub struct NeoSearcher<'a> {
    catalog: &'a NeoCatalog,
}

impl<'a> NeoSearcher<'a> {
    /// Create a searcher over a loaded catalog
    pub fn new(catalog: &'a NeoCatalog) -> Self {
        Self { catalog }
    }

    /// Execute a resolved query and return the ordered result sequence
    ///
    /// # Errors
    /// * `RangeNotFound` when a range endpoint is absent from the date index
    ///
    /// Empty results are successes: an exact-date miss and a filter that
    /// eliminates every candidate both yield an empty sequence.
    pub fn search(&self, query: &QueryDescriptor) -> Result<SearchResults> {
        let mut candidates = self.gather_candidates(query.date_search())?;
        debug!("Gathered {} candidate approach(es)", candidates.len());

        // Intersection semantics: each filter prunes the survivors of the
        // previous one. Order of application does not affect the result.
        for filter in query.filters() {
            candidates = filter.apply(candidates);
        }
        debug!("{} candidate(s) survive filtering", candidates.len());

        // Truncation happens strictly after filtering
        if let Limit::Count(n) = query.limit() {
            candidates.truncate(n);
        }

        let results = match query.shape() {
            OutputShape::Approach => SearchResults::Approaches(candidates),
            OutputShape::Neo => SearchResults::Neos(self.project_to_neos(&candidates)),
        };

        Ok(results)
    }

    /// Resolve the date-search mode into an ordered candidate list
    fn gather_candidates(&self, date_search: &DateSearch) -> Result<Vec<CloseApproach>> {
        match date_search {
            // A missing key is a normal no-results case
            DateSearch::Equals(date) => Ok(self.catalog.approaches_on(date).to_vec()),

            DateSearch::Between { start, end } => {
                // Both endpoints must exist as literal index keys; substituting
                // the nearest date could mask data-loading gaps
                for endpoint in [start, end] {
                    if !self.catalog.contains_date(endpoint) {
                        return Err(Error::range_not_found(endpoint.clone()));
                    }
                }

                // Reversed bounds yield an empty success
                if start > end {
                    return Ok(Vec::new());
                }

                // Ascending date order across dates, ingestion order within one
                let mut candidates = Vec::new();
                for approaches in self
                    .catalog
                    .approaches_by_date
                    .range(start.clone()..=end.clone())
                    .map(|(_, approaches)| approaches)
                {
                    candidates.extend_from_slice(approaches);
                }
                Ok(candidates)
            }
        }
    }

    /// Map surviving events to their owning objects, deduplicated by name
    ///
    /// An object with several surviving events appears once, at the position
    /// of its first surviving event.
    fn project_to_neos(&self, approaches: &[CloseApproach]) -> Vec<NearEarthObject> {
        let mut seen = HashSet::new();
        let mut neos = Vec::new();

        for approach in approaches {
            if !seen.insert(approach.neo_name.as_str()) {
                continue;
            }
            // The registration invariant guarantees every indexed event has
            // an aggregate in the name index
            if let Some(neo) = self.catalog.neo_by_name(&approach.neo_name) {
                neos.push(neo.clone());
            }
        }

        neos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::catalog::tests::{create_test_catalog, register_approach};
    use crate::app::services::query_builder::QueryBuilder;

    fn search(
        catalog: &NeoCatalog,
        builder: QueryBuilder,
    ) -> Result<SearchResults> {
        NeoSearcher::new(catalog).search(&builder.build()?)
    }

    fn approach_names(results: &SearchResults) -> Vec<&str> {
        match results {
            SearchResults::Approaches(approaches) => {
                approaches.iter().map(|a| a.neo_name.as_str()).collect()
            }
            SearchResults::Neos(neos) => neos.iter().map(|n| n.name.as_str()).collect(),
        }
    }

    #[test]
    fn test_exact_date_search() {
        let catalog = create_test_catalog();
        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach).date(Some("2020-01-01".to_string())),
        )
        .unwrap();

        assert_eq!(approach_names(&results), vec!["(2019 XS)", "(2015 RC)"]);
    }

    #[test]
    fn test_exact_date_miss_is_empty_success() {
        let catalog = create_test_catalog();
        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach).date(Some("1999-12-31".to_string())),
        )
        .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_range_search_ascending_date_order() {
        let mut catalog = NeoCatalog::new();
        // Registered out of chronological order
        register_approach(&mut catalog, "(2020 AB)", "2020-01-03", false, 1.0e6);
        register_approach(&mut catalog, "(2019 XS)", "2020-01-01", true, 2.0e6);
        register_approach(&mut catalog, "(2015 RC)", "2020-01-02", false, 3.0e6);

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .start_date(Some("2020-01-01".to_string()))
                .end_date(Some("2020-01-03".to_string())),
        )
        .unwrap();

        assert_eq!(
            approach_names(&results),
            vec!["(2019 XS)", "(2015 RC)", "(2020 AB)"]
        );
    }

    #[test]
    fn test_range_missing_endpoint_fails() {
        let catalog = create_test_catalog();

        // 2020-01-02 has no recorded approaches, so it is not a literal key
        let result = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .start_date(Some("2020-01-01".to_string()))
                .end_date(Some("2020-01-02".to_string())),
        );

        match result {
            Err(Error::RangeNotFound { date }) => assert_eq!(date, "2020-01-02"),
            other => panic!("expected RangeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_reversed_bounds_yield_empty_success() {
        let catalog = create_test_catalog();

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .start_date(Some("2020-01-03".to_string()))
                .end_date(Some("2020-01-01".to_string())),
        )
        .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_truncation_after_filtering() {
        let mut catalog = NeoCatalog::new();
        // Two non-hazardous then three hazardous approaches on one date
        register_approach(&mut catalog, "(a)", "2020-01-01", false, 1.0e6);
        register_approach(&mut catalog, "(b)", "2020-01-01", false, 1.0e6);
        register_approach(&mut catalog, "(c)", "2020-01-01", true, 1.0e6);
        register_approach(&mut catalog, "(d)", "2020-01-01", true, 1.0e6);
        register_approach(&mut catalog, "(e)", "2020-01-01", true, 1.0e6);

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .date(Some("2020-01-01".to_string()))
                .filters(vec!["is_hazardous:=:True".to_string()])
                .limit(Some(2)),
        )
        .unwrap();

        // A pre-filter truncation would have returned only (c); the cap must
        // apply to the filtered survivors
        assert_eq!(approach_names(&results), vec!["(c)", "(d)"]);
    }

    #[test]
    fn test_zero_cap_returns_all_survivors() {
        let catalog = create_test_catalog();

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .date(Some("2020-01-01".to_string()))
                .limit(Some(0)),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_neo_projection_deduplicates() {
        let mut catalog = NeoCatalog::new();
        register_approach(&mut catalog, "(2015 RC)", "2020-01-01", false, 1.0e6);
        register_approach(&mut catalog, "(2019 XS)", "2020-01-01", false, 2.0e6);
        register_approach(&mut catalog, "(2015 RC)", "2020-01-01", false, 3.0e6);
        register_approach(&mut catalog, "(2015 RC)", "2020-01-01", false, 4.0e6);

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Neo).date(Some("2020-01-01".to_string())),
        )
        .unwrap();

        // Three surviving events for (2015 RC) project to one object, at the
        // position of its first surviving event
        assert_eq!(approach_names(&results), vec!["(2015 RC)", "(2019 XS)"]);
    }

    #[test]
    fn test_filtered_range_scenario() {
        // Events on 2020-01-01 (x2, one hazardous) and 2020-01-03 (x1, not);
        // hazardous filter over the full range must return exactly the one
        // hazardous event
        let catalog = create_test_catalog();

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Approach)
                .start_date(Some("2020-01-01".to_string()))
                .end_date(Some("2020-01-03".to_string()))
                .filters(vec!["is_hazardous:=:True".to_string()])
                .limit(Some(10)),
        )
        .unwrap();

        match &results {
            SearchResults::Approaches(approaches) => {
                assert_eq!(approaches.len(), 1);
                assert_eq!(approaches[0].neo_name, "(2019 XS)");
                assert_eq!(approaches[0].close_approach_date, "2020-01-01");
                assert!(approaches[0].is_hazardous);
            }
            SearchResults::Neos(_) => panic!("expected approach results"),
        }
    }

    #[test]
    fn test_filter_eliminating_everything_is_empty_success() {
        let catalog = create_test_catalog();

        let results = search(
            &catalog,
            QueryBuilder::new(OutputShape::Neo)
                .date(Some("2020-01-03".to_string()))
                .filters(vec!["is_hazardous:=:True".to_string()]),
        )
        .unwrap();

        assert!(results.is_empty());
    }
}
