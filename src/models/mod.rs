//! Models module
//!
//! Core data structures shared by the import, export and fill stages.

pub mod catalog;
pub mod field;
pub mod row;

pub use catalog::{
    DEFAULT_IDENTITY_COLUMN, FIELD_NAME_ATTRIBUTE, FieldCatalog, STATE_OPTION_ATTRIBUTE,
    field_name,
};
pub use field::{FieldRecord, FieldValue};
pub use row::DataRow;
