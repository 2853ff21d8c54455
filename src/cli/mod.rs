//! Command-line interface support

pub mod commands;
pub mod error;

pub use error::CliError;

use crate::config::FormWriterConfig;
use std::path::{Path, PathBuf};

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct CommonArgs {
    /// Explicit configuration file; `.form-writer.toml` in the working directory otherwise
    pub config: Option<PathBuf>,
    /// pdftk executable, overriding the configuration
    pub pdftk: Option<PathBuf>,
}

impl CommonArgs {
    /// Resolve the effective configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<FormWriterConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.clone()));
                }
                FormWriterConfig::load_file(path)?
            }
            None => FormWriterConfig::load(Path::new("."))?,
        };
        if let Some(pdftk) = &self.pdftk {
            config.pdftk.binary = pdftk.clone();
        }
        Ok(config)
    }
}
