//! Field-definition dump importer
//!
//! Parses the text printed by `pdftk <template> dump_data_fields`:
//!
//! ```text
//! ---
//! FieldType: Button
//! FieldName: Check Box1
//! FieldFlags: 0
//! FieldStateOption: Off
//! FieldStateOption: Yes
//! ---
//! FieldType: Text
//! FieldName: Name
//! ```
//!
//! Each block between separators describes one field. Anything before the
//! first separator is noise and is discarded.

use super::ImportError;
use crate::models::{DEFAULT_IDENTITY_COLUMN, FIELD_NAME_ATTRIBUTE, FieldCatalog, FieldRecord};
use std::collections::HashSet;
use tracing::{debug, info};

/// Token separating field blocks in a pdftk dump
pub const BLOCK_SEPARATOR: &str = "---";

/// Delimiter between attribute name and value on a block line
const KEY_VALUE_DELIMITER: &str = ": ";

/// Parse one block of `Key: Value` lines into a field record.
///
/// Lines are CRLF (or LF) terminated; empty lines are skipped. A line without
/// the `": "` delimiter is stored as a key with an empty value. Repeated keys
/// are merged into a sequence in order of appearance.
///
/// # Example
///
/// ```rust
/// use form_writer::import::parse_block;
/// use form_writer::models::FieldValue;
///
/// let record = parse_block("FieldName: Check\r\nFieldStateOption: Off\r\nFieldStateOption: Yes\r\n");
/// assert_eq!(record.get("FieldName"), Some(&FieldValue::Scalar("Check".to_string())));
/// assert_eq!(record.get("FieldStateOption").unwrap().values().len(), 2);
/// ```
pub fn parse_block(block: &str) -> FieldRecord {
    let mut record = FieldRecord::new();
    for line in block.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once(KEY_VALUE_DELIMITER).unwrap_or((line, ""));
        record.insert(key, value.to_string());
    }
    record
}

/// Builds a field catalog from a dump
#[derive(Debug, Clone)]
pub struct FieldCatalogBuilder {
    identity_column: String,
    separator: String,
}

impl Default for FieldCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldCatalogBuilder {
    /// Create a builder using the default identity column and pdftk separator
    pub fn new() -> Self {
        Self {
            identity_column: DEFAULT_IDENTITY_COLUMN.to_string(),
            separator: BLOCK_SEPARATOR.to_string(),
        }
    }

    /// Use a different identity column name
    pub fn with_identity_column(mut self, identity_column: impl Into<String>) -> Self {
        self.identity_column = identity_column.into();
        self
    }

    /// Use a different block separator token
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Parse a dump into a catalog
    ///
    /// Fails when a block has no usable field name or when a name repeats
    /// (including a field named like the identity column).
    pub fn build(&self, dump: &str) -> Result<FieldCatalog, ImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(self.identity_column.clone());

        let mut fields = Vec::new();
        // Block numbers are 1-based and count every segment after the header.
        for (index, block) in dump.split(self.separator.as_str()).skip(1).enumerate() {
            let block_number = index + 1;
            if block.lines().all(|line| line.trim().is_empty()) {
                debug!("Skipping empty field block {}", block_number);
                continue;
            }

            let record = parse_block(block);
            let name = match record.get(FIELD_NAME_ATTRIBUTE) {
                None => {
                    return Err(ImportError::MissingFieldName {
                        block: block_number,
                    });
                }
                Some(value) => match value.as_scalar() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    Some(_) => {
                        return Err(ImportError::MissingFieldName {
                            block: block_number,
                        });
                    }
                    None => {
                        return Err(ImportError::AmbiguousFieldName {
                            block: block_number,
                        });
                    }
                },
            };

            if !seen.insert(name.clone()) {
                return Err(ImportError::DuplicateFieldName(name));
            }
            fields.push(record);
        }

        info!("Found {} fields", fields.len());
        Ok(FieldCatalog::from_parts(self.identity_column.clone(), fields))
    }
}
