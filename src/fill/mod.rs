//! Form filling
//!
//! Turns data rows into filled documents through a [`PdfToolkit`]:
//! - [`RowFormFiller`] handles one row (identity check, FDF, tool call, cleanup)
//! - [`BatchOrchestrator`] runs a whole table, isolating per-row failures
//!
//! [`PdfToolkit`]: crate::toolkit::PdfToolkit

pub mod batch;
pub mod filler;

use crate::models::DEFAULT_IDENTITY_COLUMN;
use crate::toolkit::ToolError;
use std::path::PathBuf;

/// Default name of the intermediate FDF file
pub const DEFAULT_INTERMEDIATE_FILE: &str = "data.fdf";

/// Default text between template name and identity value in output names
pub const DEFAULT_NAME_SEPARATOR: &str = " - ";

/// Extension of generated documents
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Error filling a single row
#[derive(Debug, thiserror::Error)]
pub enum FillError {
    #[error("IO error: {0}")]
    Io(String),
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Why a row produced no document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The identity column is missing or empty
    EmptyIdentity { column: String },
    /// The identity value cannot be used inside a file name
    UnsafeIdentity { column: String, value: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptyIdentity { column } => {
                write!(f, "Empty row encountered (no value in column <{}>)", column)
            }
            SkipReason::UnsafeIdentity { column, value } => write!(
                f,
                "Row skipped (value <{}> in column <{}> contains a path separator)",
                value, column
            ),
        }
    }
}

/// Result of filling one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// Document written to this path
    Written(PathBuf),
    /// Row skipped, no document produced
    Skipped(SkipReason),
}

/// Where the FDF dataset for a row is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateFile {
    /// Same path for every row. Only one filler may use it at a time.
    Fixed(PathBuf),
    /// Fresh temporary file for every row
    PerInvocation,
}

impl Default for IntermediateFile {
    fn default() -> Self {
        IntermediateFile::Fixed(PathBuf::from(DEFAULT_INTERMEDIATE_FILE))
    }
}

/// Settings shared by every row of a fill run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillSettings {
    pub identity_column: String,
    pub intermediate: IntermediateFile,
    /// Output directory; the template's directory when `None`
    pub output_dir: Option<PathBuf>,
    pub name_separator: String,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            identity_column: DEFAULT_IDENTITY_COLUMN.to_string(),
            intermediate: IntermediateFile::default(),
            output_dir: None,
            name_separator: DEFAULT_NAME_SEPARATOR.to_string(),
        }
    }
}

// Re-export for convenience
pub use batch::{BatchOrchestrator, BatchReport, RowOutcome, RowReport};
pub use filler::RowFormFiller;
