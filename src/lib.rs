//! Merge-sort based file sorting utility
//!
//! Reads lines from one or more input files, interprets them as strings
//! or integers, sorts them ascending or descending with a generic merge
//! sort, and writes the result to a new output file.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod merge_sort;
pub mod output;

// Re-export commonly used types
pub use config::{SortConfig, SortMode, SortOrder};
pub use error::{SortError, SortResult};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Main sort function that processes input according to configuration.
///
/// The whole run is one sequential computation: read all input files into
/// memory, filter and convert, sort, write the output file. Per-file read
/// failures and per-line parse failures are absorbed during ingestion;
/// only output-file failures propagate from here.
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let lines = input::read_lines(&config.input_files);

    match config.mode {
        SortMode::Lexicographic => {
            let cmp = compare::ordering::<String>(config.order);
            let sorted = merge_sort::sort(&lines, &cmp);
            output::write_sorted(&config.output_file, &sorted)?;
        }
        SortMode::Numeric => {
            let elements = input::parse_integers(&lines);
            let cmp = compare::ordering::<i64>(config.order);
            let sorted = merge_sort::sort(&elements, &cmp);
            output::write_sorted(&config.output_file, &sorted)?;
        }
    }

    Ok(EXIT_SUCCESS)
}
