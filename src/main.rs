use clap::Parser;
use neo_explorer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NEO Explorer - NASA Close-Approach Data Query Tool");
    println!("==================================================");
    println!();
    println!("Load NASA near-Earth object close-approach data from a CSV file and");
    println!("query it by date, date range, and field filters.");
    println!();
    println!("USAGE:");
    println!("    neo-explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    query    Search the close-approach catalog (main command)");
    println!("    info     Print a summary report of the loaded catalog");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # All approaches on one date, as deduplicated objects:");
    println!("    neo-explorer query --date 2020-01-01");
    println!();
    println!("    # Hazardous approaches within a range, first ten events:");
    println!("    neo-explorer query --start-date 2020-01-01 --end-date 2020-01-10 \\");
    println!("                       --filter is_hazardous:=:True -n 10 -r approach");
    println!();
    println!("    # Write results to a CSV file:");
    println!("    neo-explorer query --date 2020-01-01 --output-format csv -o results.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    neo-explorer <COMMAND> --help");
}
