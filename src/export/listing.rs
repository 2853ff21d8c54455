//! Field listing for operators
//!
//! Two tab-separated columns: field name and the full attribute record as JSON.
//! Used to cross-reference template columns with the fields of the PDF; never
//! read back.

use super::ExportError;
use crate::models::{FieldCatalog, field_name};
use std::io::Write;
use std::path::Path;

const LISTING_HEADER: &str = "Field Name\tField Description";

/// Write the listing of discovered fields (the identity column is omitted)
pub fn write_field_listing<W: Write>(
    catalog: &FieldCatalog,
    mut writer: W,
) -> Result<(), ExportError> {
    writeln!(writer, "{}", LISTING_HEADER)?;
    for record in catalog.discovered() {
        let description = serde_json::to_string(record)
            .map_err(|e| ExportError::Io(format!("Failed to serialize field record: {}", e)))?;
        writeln!(
            writer,
            "{}\t{}",
            field_name(record).unwrap_or_default(),
            description
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the listing to a file
pub fn write_field_listing_to_path(catalog: &FieldCatalog, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_field_listing(catalog, std::io::BufWriter::new(file))
}
