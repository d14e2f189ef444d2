//! Output file writing

use crate::error::{SortError, SortResult};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the sorted elements to the output file, one per line.
///
/// A pre-existing output file is overwritten, but never silently: a
/// notice goes to stdout first. Creation or write failures surface as
/// `SortError::OutputWrite`.
pub fn write_sorted<T: Display>(path: &str, elements: &[T]) -> SortResult<()> {
    if Path::new(path).exists() {
        println!("msort: output file {path} already exists, overwriting");
    }

    let file = File::create(path).map_err(|err| SortError::output_write(path, err))?;
    let mut writer = BufWriter::new(file);

    for element in elements {
        writeln!(writer, "{element}").map_err(|err| SortError::output_write(path, err))?;
    }

    writer
        .flush()
        .map_err(|err| SortError::output_write(path, err))
}
