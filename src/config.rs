//! Configuration file support
//!
//! Handles parsing of `.form-writer.toml` configuration files and
//! environment variable overrides.

use crate::fill::{
    DEFAULT_INTERMEDIATE_FILE, DEFAULT_NAME_SEPARATOR, FillSettings, IntermediateFile,
};
use crate::models::DEFAULT_IDENTITY_COLUMN;
use crate::toolkit::Pdftk;
use crate::toolkit::pdftk::DEFAULT_PDFTK_BINARY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".form-writer.toml";

/// Environment variable for the pdftk executable
pub const ENV_PDFTK: &str = "FORM_WRITER_PDFTK";

/// Environment variable for the pdftk timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "FORM_WRITER_TIMEOUT_SECS";

/// Environment variable for the identity column name
pub const ENV_IDENTITY_COLUMN: &str = "FORM_WRITER_IDENTITY_COLUMN";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Failed to serialize config: {0}")]
    Serialization(String),
}

/// pdftk configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdftkSection {
    /// pdftk executable
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Seconds to wait for one pdftk call, 0 waits forever
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_binary() -> PathBuf {
    PathBuf::from(DEFAULT_PDFTK_BINARY)
}

impl Default for PdftkSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_secs: 0,
        }
    }
}

/// Fill configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSection {
    /// Reserved column naming each output document
    #[serde(default = "default_identity_column")]
    pub identity_column: String,

    /// Intermediate FDF file shared by all rows
    #[serde(default = "default_intermediate_file")]
    pub intermediate_file: PathBuf,

    /// Use a fresh temporary FDF file per row instead of `intermediate_file`
    #[serde(default)]
    pub per_invocation_intermediate: bool,

    /// Text between the template name and the identity value
    #[serde(default = "default_name_separator")]
    pub name_separator: String,

    /// Output directory, the template's directory when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_identity_column() -> String {
    DEFAULT_IDENTITY_COLUMN.to_string()
}

fn default_intermediate_file() -> PathBuf {
    PathBuf::from(DEFAULT_INTERMEDIATE_FILE)
}

fn default_name_separator() -> String {
    DEFAULT_NAME_SEPARATOR.to_string()
}

impl Default for FillSection {
    fn default() -> Self {
        Self {
            identity_column: default_identity_column(),
            intermediate_file: default_intermediate_file(),
            per_invocation_intermediate: false,
            name_separator: default_name_separator(),
            output_dir: None,
        }
    }
}

/// Main configuration structure
///
/// Represents the `.form-writer.toml` configuration file format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormWriterConfig {
    #[serde(default)]
    pub pdftk: PdftkSection,

    #[serde(default)]
    pub fill: FillSection,
}

impl FormWriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a directory
    ///
    /// Looks for `.form-writer.toml` in `dir`, falling back to defaults, then
    /// applies environment overrides.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(binary) = lookup(ENV_PDFTK) {
            self.pdftk.binary = PathBuf::from(binary);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS)
            && let Ok(secs) = secs.parse()
        {
            self.pdftk.timeout_secs = secs;
        }

        if let Some(column) = lookup(ENV_IDENTITY_COLUMN)
            && !column.is_empty()
        {
            self.fill.identity_column = column;
        }
    }

    /// pdftk call timeout, `None` when unbounded
    pub fn timeout(&self) -> Option<Duration> {
        (self.pdftk.timeout_secs > 0).then(|| Duration::from_secs(self.pdftk.timeout_secs))
    }

    /// Toolkit configured from the pdftk section
    pub fn toolkit(&self) -> Pdftk {
        Pdftk::new()
            .with_binary(self.pdftk.binary.clone())
            .with_timeout(self.timeout())
    }

    /// Fill settings configured from the fill section
    pub fn fill_settings(&self) -> FillSettings {
        let intermediate = if self.fill.per_invocation_intermediate {
            IntermediateFile::PerInvocation
        } else {
            IntermediateFile::Fixed(self.fill.intermediate_file.clone())
        };
        FillSettings {
            identity_column: self.fill.identity_column.clone(),
            intermediate,
            output_dir: self.fill.output_dir.clone(),
            name_separator: self.fill.name_separator.clone(),
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# form-writer configuration

[pdftk]
# pdftk executable (name on PATH or absolute path)
binary = "pdftk"

# Seconds to wait for a single pdftk call, 0 waits forever
timeout_secs = 0

[fill]
# Reserved column whose value names each generated document
identity_column = "form-writer form id"

# Intermediate FDF file written before every pdftk call
intermediate_file = "data.fdf"

# Use a unique temporary FDF file per row instead
per_invocation_intermediate = false

# Output documents are named "<template><separator><id>.pdf"
name_separator = " - "
"#
}
