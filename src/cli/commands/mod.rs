//! CLI command implementations

pub mod get_fields;
pub mod write_forms;
