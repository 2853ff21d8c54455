//! Import functionality
//!
//! Provides parsers turning external text into models:
//! - Field-definition dumps (`pdftk dump_data_fields` output) into a field catalog
//! - CSV data tables into data rows

pub mod dump;
pub mod table;

/// Error during import
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Field block {block} has no field name")]
    MissingFieldName { block: usize },
    #[error("Field block {block} declares more than one field name")]
    AmbiguousFieldName { block: usize },
    #[error("Duplicate field name: {0}")]
    DuplicateFieldName(String),
    #[error("Data table error: {0}")]
    Table(String),
    #[error("IO error: {0}")]
    Io(String),
}

// Re-export for convenience
pub use dump::{BLOCK_SEPARATOR, FieldCatalogBuilder, parse_block};
pub use table::{read_data_rows, read_data_rows_from_path};
