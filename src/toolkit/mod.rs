//! PDF toolkit abstraction
//!
//! The field-extraction and form-fill utilities are external programs. This
//! trait is the only place the rest of the crate touches them, so tests can
//! substitute a fake toolkit for `pdftk`.

pub mod pdftk;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Error invoking an external PDF utility
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("PDF tool not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to run PDF tool: {0}")]
    Spawn(String),
    #[error("PDF tool exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("PDF tool timed out after {0:?}")]
    TimedOut(Duration),
    #[error("PDF tool produced invalid output: {0}")]
    InvalidOutput(String),
}

/// External utilities for reading and filling PDF forms
pub trait PdfToolkit {
    /// Return the field-definition dump of `template`
    fn dump_fields(&self, template: &Path) -> Result<String, ToolError>;

    /// Merge the FDF dataset at `data` into `template`, writing `output`
    fn fill_form(&self, template: &Path, data: &Path, output: &Path) -> Result<(), ToolError>;
}

impl<T: PdfToolkit + ?Sized> PdfToolkit for &T {
    fn dump_fields(&self, template: &Path) -> Result<String, ToolError> {
        (**self).dump_fields(template)
    }

    fn fill_form(&self, template: &Path, data: &Path, output: &Path) -> Result<(), ToolError> {
        (**self).fill_form(template, data, output)
    }
}

pub use pdftk::Pdftk;
