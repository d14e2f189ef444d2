//! Input ingestion
//!
//! Reads every input file fully into memory, trims each line and drops
//! lines that are empty after trimming. Per-file read failures are
//! absorbed: the file contributes zero lines and processing continues
//! with the remaining files.

use std::fs;

/// Read all input files into a single list of trimmed, non-empty lines.
///
/// Files are read in argument order and lines keep their file order, so
/// the stable sort downstream sees a deterministic input sequence. A
/// missing or unreadable file produces a warning on stdout and nothing
/// else.
pub fn read_lines(input_files: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    for file in input_files {
        match fs::read_to_string(file) {
            Ok(contents) => {
                lines.extend(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(String::from),
                );
            }
            Err(err) => {
                println!("msort: cannot read file {file}: {err}");
            }
        }
    }

    lines
}

/// Parse lines as integers for numeric mode.
///
/// Tokens that fail to parse are silently dropped, per the ingestion
/// contract; the sort engine never sees unparsable input.
pub fn parse_integers(lines: &[String]) -> Vec<i64> {
    lines
        .iter()
        .filter_map(|line| line.parse::<i64>().ok())
        .collect()
}
