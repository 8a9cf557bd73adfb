//! Command implementations for the NEO explorer CLI
//!
//! Each command is implemented in its own module; this module dispatches to
//! the appropriate handler based on the parsed CLI args.

pub mod info;
pub mod query;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the NEO explorer
///
/// Dispatches to the appropriate subcommand handler:
/// - `query`: catalog search with filters and result projection
/// - `info`: catalog summary report
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Query(query_args) => query::run_query(query_args),
        Commands::Info(info_args) => info::run_info(info_args),
    }
}
