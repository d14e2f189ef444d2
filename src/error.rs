//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Usage { message: String },

    #[error("Data type flag is not set")]
    MissingTypeFlag,

    #[error("Could not create or write output file {file}: {source}")]
    OutputWrite { file: String, source: io::Error },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::Usage { .. } | SortError::MissingTypeFlag => crate::EXIT_FAILURE,

            SortError::Io(_) | SortError::OutputWrite { .. } => crate::SORT_FAILURE,
        }
    }

    /// Create a usage error
    pub fn usage(message: &str) -> Self {
        SortError::Usage {
            message: message.to_string(),
        }
    }

    /// Create an output write error
    pub fn output_write(file: &str, source: io::Error) -> Self {
        SortError::OutputWrite {
            file: file.to_string(),
            source,
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;
