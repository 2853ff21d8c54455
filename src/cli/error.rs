//! CLI-specific error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::fill::FillError;
use crate::import::ImportError;
use crate::toolkit::ToolError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error(
        "pdftk not found at {0}.\n\nInstallation:\n  macOS:    brew install pdftk-java\n  Linux:    sudo apt-get install pdftk-java (Debian/Ubuntu) or sudo dnf install pdftk-java (Fedora)\n  Windows:  https://www.pdflabs.com/tools/pdftk-the-pdf-toolkit/\n\nAlternatively, use --pdftk to specify a custom pdftk location."
    )]
    PdftkNotFound(PathBuf),

    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Fill error: {0}")]
    FillError(#[from] FillError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("pdftk error: {0}")]
    ToolError(ToolError),
}

impl From<ToolError> for CliError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(path) => CliError::PdftkNotFound(path),
            other => CliError::ToolError(other),
        }
    }
}
