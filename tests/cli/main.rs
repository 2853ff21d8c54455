//! CLI command tests

#[cfg(feature = "cli")]
#[path = "../common/mod.rs"]
mod common;

#[cfg(feature = "cli")]
mod get_fields_tests;
#[cfg(feature = "cli")]
mod write_forms_tests;
