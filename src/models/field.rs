//! Field record model
//!
//! A field record is the structured form of one block of a field-definition
//! dump. Attributes may repeat inside a block (e.g. `FieldStateOption` for
//! every state of a checkbox), so each attribute holds either a single value
//! or an ordered sequence of values.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Value of a single field attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Attribute seen once
    Scalar(String),
    /// Attribute seen more than once, values in order of appearance
    Sequence(Vec<String>),
}

impl FieldValue {
    /// Merge another occurrence of the same attribute into this value.
    ///
    /// A scalar is promoted to a two-element sequence; a sequence is appended to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use form_writer::models::FieldValue;
    ///
    /// let value = FieldValue::Scalar("1".to_string()).merge("4".to_string());
    /// assert_eq!(value, FieldValue::Sequence(vec!["1".to_string(), "4".to_string()]));
    /// ```
    pub fn merge(self, value: String) -> FieldValue {
        match self {
            FieldValue::Scalar(old) => FieldValue::Sequence(vec![old, value]),
            FieldValue::Sequence(mut values) => {
                values.push(value);
                FieldValue::Sequence(values)
            }
        }
    }

    /// All values as a slice. A scalar is a one-element slice.
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::Scalar(value) => std::slice::from_ref(value),
            FieldValue::Sequence(values) => values,
        }
    }

    /// The value if this attribute was seen exactly once
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::Sequence(_) => None,
        }
    }
}

/// Ordered attribute mapping for one form field
///
/// Attribute order follows the order of first appearance in the dump block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRecord {
    attributes: Vec<(String, FieldValue)>,
}

impl FieldRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding only a field name attribute
    pub fn named(name_attribute: &str, name: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(name_attribute, name.into());
        record
    }

    /// Insert an attribute value, merging with an existing value of the same key
    pub fn insert(&mut self, key: &str, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => {
                let current = std::mem::replace(existing, FieldValue::Sequence(Vec::new()));
                *existing = current.merge(value);
            }
            None => self
                .attributes
                .push((key.to_string(), FieldValue::Scalar(value))),
        }
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate over attributes in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
