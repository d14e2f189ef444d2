//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Main configuration structure for a sort run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// How input lines are interpreted
    pub mode: SortMode,
    /// Sort direction
    pub order: SortOrder,
    /// Output file path
    pub output_file: String,
    /// Files to read from
    pub input_files: Vec<String>,
}

/// Sort mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Standard lexicographic sorting of lines as strings
    Lexicographic,
    /// Numeric sorting of lines parsed as integers
    Numeric,
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortConfig {
    /// Create a new configuration
    pub fn new(
        mode: SortMode,
        order: SortOrder,
        output_file: String,
        input_files: Vec<String>,
    ) -> Self {
        Self {
            mode,
            order,
            output_file,
            input_files,
        }
    }

    /// Set the sort mode
    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.output_file.is_empty() {
            return Err(SortError::usage("Input and output files are not set"));
        }
        if self.input_files.is_empty() {
            return Err(SortError::usage("Input files are not set"));
        }
        Ok(())
    }

    /// Check if numeric sort mode is enabled
    pub fn numeric_sort(&self) -> bool {
        matches!(self.mode, SortMode::Numeric)
    }

    /// Get the number of input files
    pub fn input_file_count(&self) -> usize {
        self.input_files.len()
    }
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "string" | "s" => Ok(SortMode::Lexicographic),
            "numeric" | "integer" | "i" => Ok(SortMode::Numeric),
            _ => Err(SortError::usage(&format!("unknown sort mode: {s}"))),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortMode::Lexicographic => "lexicographic",
            SortMode::Numeric => "numeric",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        };
        write!(f, "{name}")
    }
}
