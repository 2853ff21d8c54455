//! Single-row form filling

use super::{
    DOCUMENT_EXTENSION, FillError, FillOutcome, FillSettings, IntermediateFile, SkipReason,
};
use crate::export::FdfWriter;
use crate::models::DataRow;
use crate::toolkit::PdfToolkit;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fills one template per data row
pub struct RowFormFiller<T: PdfToolkit> {
    toolkit: T,
    settings: FillSettings,
    fdf: FdfWriter,
}

impl<T: PdfToolkit> RowFormFiller<T> {
    pub fn new(toolkit: T, settings: FillSettings) -> Self {
        Self {
            toolkit,
            settings,
            fdf: FdfWriter::new(),
        }
    }

    /// Path of the document generated for `identity`.
    ///
    /// `<output dir>/<template stem><separator><identity>.pdf`. `identity` is
    /// used verbatim; [`fill`](Self::fill) rejects values with path separators
    /// before calling this.
    pub fn output_path(&self, template: &Path, identity: &str) -> PathBuf {
        let stem = template
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!(
            "{}{}{}.{}",
            stem, self.settings.name_separator, identity, DOCUMENT_EXTENSION
        );
        let dir = match &self.settings.output_dir {
            Some(dir) => dir.as_path(),
            None => template.parent().unwrap_or_else(|| Path::new("")),
        };
        dir.join(file_name)
    }

    /// Fill `template` with the values of `row`.
    ///
    /// Rows without an identity value are skipped. The intermediate FDF file
    /// is removed after the tool call whether or not the call succeeded.
    pub fn fill(&self, row: &DataRow, template: &Path) -> Result<FillOutcome, FillError> {
        let Some(identity) = row.identity(&self.settings.identity_column) else {
            let reason = SkipReason::EmptyIdentity {
                column: self.settings.identity_column.clone(),
            };
            warn!("{}", reason);
            return Ok(FillOutcome::Skipped(reason));
        };
        if !is_file_name_safe(identity) {
            let reason = SkipReason::UnsafeIdentity {
                column: self.settings.identity_column.clone(),
                value: identity.to_string(),
            };
            warn!("{}", reason);
            return Ok(FillOutcome::Skipped(reason));
        }

        let output = self.output_path(template, identity);
        let data = self.fdf.encode(row);

        match &self.settings.intermediate {
            IntermediateFile::Fixed(path) => {
                std::fs::write(path, &data).map_err(|e| {
                    FillError::Io(format!("Failed to write {}: {}", path.display(), e))
                })?;
                let result = self.toolkit.fill_form(template, path, &output);
                remove_if_present(path);
                result?;
            }
            IntermediateFile::PerInvocation => {
                let mut file = tempfile::Builder::new()
                    .prefix("form-writer-")
                    .suffix(".fdf")
                    .tempfile()
                    .map_err(|e| FillError::Io(format!("Failed to create FDF file: {}", e)))?;
                file.write_all(&data)
                    .and_then(|_| file.flush())
                    .map_err(|e| FillError::Io(format!("Failed to write FDF file: {}", e)))?;
                let path = file.into_temp_path();
                let result = self.toolkit.fill_form(template, &path, &output);
                let shown = path.display().to_string();
                if let Err(e) = path.close() {
                    warn!("Failed to remove {}: {}", shown, e);
                }
                result?;
            }
        }

        info!("Wrote {}", output.display());
        Ok(FillOutcome::Written(output))
    }
}

/// Whether `identity` can be embedded in a file name without leaving the output directory
fn is_file_name_safe(identity: &str) -> bool {
    !identity.contains(['/', '\\', '\0'])
}

/// Remove a file if it exists. A missing file is not an error.
fn remove_if_present(path: &Path) {
    if !path.exists() {
        debug!("{} already removed", path.display());
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        warn!("Failed to remove {}: {}", path.display(), e);
    }
}
