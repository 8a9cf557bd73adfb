//! Command-line argument definitions for NEO explorer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::query_builder::OutputShape;
use crate::constants::{DEFAULT_DATA_FILE, DEFAULT_RESULTS_FILE};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NEO close-approach explorer
///
/// Loads NASA near-Earth object close-approach data from a CSV file and
/// answers date and date-range queries with optional field filters.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "neo-explorer",
    version,
    about = "Query NASA near-Earth object close-approach data by date",
    long_about = "Loads a catalog of NASA near-Earth object close-approach records from a CSV \
                  file, indexes it in memory, and answers structured queries: all approaches on \
                  an exact date, or all approaches within a date range, optionally narrowed by \
                  filters on hazard status, estimated diameter, and miss distance."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the NEO explorer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Search the close-approach catalog (main command)
    Query(QueryArgs),
    /// Print a summary report of the loaded catalog
    Info(InfoArgs),
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Path to the close-approach CSV data file
    #[arg(
        short = 'i',
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the close-approach CSV data file"
    )]
    pub data_file: PathBuf,

    /// Exact approach date to search for
    ///
    /// Mutually exclusive with a start/end date pair; supplying both is
    /// rejected as ambiguous rather than resolved by priority.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Search for approaches on exactly this date"
    )]
    pub date: Option<String>,

    /// Start of the approach date range (inclusive)
    #[arg(
        short = 's',
        long = "start-date",
        value_name = "YYYY-MM-DD",
        help = "Search for approaches from this date (requires --end-date)"
    )]
    pub start_date: Option<String>,

    /// End of the approach date range (inclusive)
    #[arg(
        short = 'e',
        long = "end-date",
        value_name = "YYYY-MM-DD",
        help = "Search for approaches up to this date (requires --start-date)"
    )]
    pub end_date: Option<String>,

    /// Field filters in field:operator:value form (repeatable)
    ///
    /// Recognized fields: is_hazardous, diameter, distance.
    /// Recognized operators: =, <, >, <=, >=.
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "FIELD:OP:VALUE",
        help = "Filter results, e.g. is_hazardous:=:True or distance:>=:70000"
    )]
    pub filters: Vec<String>,

    /// Maximum number of results to return
    ///
    /// Zero or unset means no cap.
    #[arg(
        short = 'n',
        long = "number",
        value_name = "COUNT",
        help = "Return at most this many results (0 = unlimited)"
    )]
    pub number: Option<usize>,

    /// Shape of the returned results
    #[arg(
        short = 'r',
        long = "return-object",
        value_enum,
        default_value = "neo",
        help = "Return deduplicated objects (neo) or raw approach events (approach)"
    )]
    pub return_object: OutputShape,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Output file for CSV-formatted results
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        default_value = DEFAULT_RESULTS_FILE,
        help = "Output file for CSV-formatted results"
    )]
    pub output_file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the info command
#[derive(Debug, Clone, Parser)]
pub struct InfoArgs {
    /// Path to the close-approach CSV data file
    #[arg(
        short = 'i',
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the close-approach CSV data file"
    )]
    pub data_file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable display on stdout
    Human,
    /// CSV file output
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl QueryArgs {
    /// Validate the query command arguments for consistency
    ///
    /// Date semantics are validated by the query builder; this only checks
    /// the parts the builder never sees.
    pub fn validate(&self) -> Result<()> {
        if !self.data_file.exists() {
            return Err(Error::configuration(format!(
                "data file does not exist: {}",
                self.data_file.display()
            )));
        }

        if self.output_format == OutputFormat::Csv {
            if let Some(parent) = self.output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress bar during loading
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InfoArgs {
    /// Validate the info command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.data_file.exists() {
            return Err(Error::configuration(format!(
                "data file does not exist: {}",
                self.data_file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
