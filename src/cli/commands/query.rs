//! Query command implementation
//!
//! Loads the catalog, resolves the CLI inputs into a query descriptor, runs
//! the search, and hands the results to the requested writer.

use super::shared::setup_logging;
use crate::app::services::catalog::NeoCatalog;
use crate::app::services::query_builder::QueryBuilder;
use crate::app::services::results_writer;
use crate::app::services::searcher::NeoSearcher;
use crate::cli::args::{OutputFormat, QueryArgs};
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Query command runner
pub fn run_query(args: QueryArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting close-approach query");
    debug!("Query arguments: {:?}", args);

    args.validate()?;

    let (catalog, load_stats) =
        NeoCatalog::load_from_csv(&args.data_file, args.show_progress())?;
    info!("Catalog ready: {}", load_stats.summary());

    let query = QueryBuilder::new(args.return_object)
        .date(args.date)
        .start_date(args.start_date)
        .end_date(args.end_date)
        .filters(args.filters)
        .limit(args.number)
        .build()?;

    let results = NeoSearcher::new(&catalog).search(&query)?;

    match args.output_format {
        OutputFormat::Human => results_writer::display_results(&results),
        OutputFormat::Csv => results_writer::write_csv(&results, &args.output_file)?,
    }

    info!(
        "Query completed: {} result(s) in {:.2}s",
        results.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
