//! msort command-line entry point
//!
//! `msort [-a|-d] (-s|-i) <OUTPUT> <INPUT>...`
//!
//! Sorts the lines of the input files as strings or integers and writes
//! the result to the output file. All diagnostics, including fatal usage
//! errors, go to standard output.

use clap::{Arg, ArgAction, Command};
use std::process;

use msort::{
    config::{SortConfig, SortMode, SortOrder},
    error::{SortError, SortResult},
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            println!("msort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    msort::sort(&config)
}

fn build_cli() -> Command {
    Command::new("msort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("msort [-a|-d] <-s|-i> <OUTPUT> <INPUT>...")
        .about("Sort lines of text files with merge sort")
        .long_about(
            "Sort lines of text files with merge sort.\n\n\
             Lines are trimmed of surrounding whitespace and empty lines are \
             discarded. A data type flag (-s or -i) selects whether lines are \
             compared as strings or as integers; in integer mode, lines that \
             do not parse are dropped. The first path argument names the \
             output file, every following path an input file.",
        )
        // Direction flags; the last one given wins
        .arg(
            Arg::new("ascending")
                .short('a')
                .long("ascending")
                .help("Sort in ascending order (default)")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["ascending", "descending"]),
        )
        .arg(
            Arg::new("descending")
                .short('d')
                .long("descending")
                .help("Sort in descending order")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["ascending", "descending"]),
        )
        // Data type flags; one is required, the last one given wins
        .arg(
            Arg::new("string-sort")
                .short('s')
                .long("string-sort")
                .help("Compare lines as strings")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["string-sort", "integer-sort"]),
        )
        .arg(
            Arg::new("integer-sort")
                .short('i')
                .long("integer-sort")
                .help("Compare lines as integers, dropping unparsable lines")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["string-sort", "integer-sort"]),
        )
        .arg(
            Arg::new("paths")
                .help("Output file followed by one or more input files")
                .num_args(0..)
                .value_name("FILE"),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    // The data type flag is mandatory; direction defaults to ascending
    let mode = if matches.get_flag("integer-sort") {
        SortMode::Numeric
    } else if matches.get_flag("string-sort") {
        SortMode::Lexicographic
    } else {
        return Err(SortError::MissingTypeFlag);
    };

    let order = if matches.get_flag("descending") {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    let mut paths: Vec<String> = matches
        .get_many::<String>("paths")
        .unwrap_or_default()
        .cloned()
        .collect();

    if paths.is_empty() {
        return Err(SortError::usage("Input and output files are not set"));
    }
    if paths.len() < 2 {
        return Err(SortError::usage("Input files are not set"));
    }

    let output_file = paths.remove(0);
    let config = SortConfig::new(mode, order, output_file, paths);
    config.validate()?;

    Ok(config)
}
