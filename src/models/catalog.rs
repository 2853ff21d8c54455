//! Field catalog model

use super::field::FieldRecord;

/// Default name of the reserved identity column
pub const DEFAULT_IDENTITY_COLUMN: &str = "form-writer form id";

/// Attribute carrying a field's unique name
pub const FIELD_NAME_ATTRIBUTE: &str = "FieldName";

/// Attribute listing a field's discrete allowed values
pub const STATE_OPTION_ATTRIBUTE: &str = "FieldStateOption";

/// Ordered set of form fields discovered in a template
///
/// The first entry is always the synthetic identity-column record. Field names
/// are unique across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCatalog {
    identity_column: String,
    fields: Vec<FieldRecord>,
}

impl FieldCatalog {
    /// Assemble a catalog from already validated parts.
    ///
    /// `fields` excludes the identity record, which is prepended here.
    pub(crate) fn from_parts(identity_column: String, fields: Vec<FieldRecord>) -> Self {
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(FieldRecord::named(FIELD_NAME_ATTRIBUTE, identity_column.clone()));
        all.extend(fields);
        Self {
            identity_column,
            fields: all,
        }
    }

    /// Name of the identity column
    pub fn identity_column(&self) -> &str {
        &self.identity_column
    }

    /// All records, identity record first
    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    /// Records discovered in the dump, without the identity record
    pub fn discovered(&self) -> &[FieldRecord] {
        &self.fields[1..]
    }

    /// Field names in catalog order
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().filter_map(field_name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A catalog always holds the identity record, so it is never empty
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Field name of a record, if it has a single one
pub fn field_name(record: &FieldRecord) -> Option<&str> {
    record
        .get(FIELD_NAME_ATTRIBUTE)
        .and_then(|value| value.as_scalar())
}
