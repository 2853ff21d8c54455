//! Export functionality
//!
//! Provides writers for the files this tool produces:
//! - CSV table template (header + sample row)
//! - Field listing (tab-separated diagnostics)
//! - FDF (Forms Data Format) input for the form-fill utility

pub mod fdf;
pub mod listing;
pub mod template;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Re-export for convenience
pub use fdf::FdfWriter;
pub use listing::{write_field_listing, write_field_listing_to_path};
pub use template::{
    FirstOption, IDENTITY_SAMPLE_VALUE, RandomChooser, SampleChooser, TableTemplate,
    TemplateTableGenerator,
};
