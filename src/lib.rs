//! form-writer - data-driven PDF form filling
//!
//! Provides the three stages of a form-filling run:
//! - Field discovery: parse a `pdftk dump_data_fields` dump into a field catalog
//! - Template generation: derive a CSV data-entry template with a sample row
//! - Batch filling: generate one filled document per populated table row

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod export;
pub mod fill;
pub mod import;
pub mod models;
pub mod toolkit;

// Re-export commonly used types
pub use config::{ConfigError, FormWriterConfig};
pub use export::{
    ExportError, FdfWriter, FirstOption, RandomChooser, SampleChooser, TableTemplate,
    TemplateTableGenerator,
};
pub use fill::{
    BatchOrchestrator, BatchReport, FillError, FillOutcome, FillSettings, IntermediateFile,
    RowFormFiller, RowOutcome, RowReport, SkipReason,
};
pub use import::{FieldCatalogBuilder, ImportError, parse_block, read_data_rows};
pub use models::{DataRow, FieldCatalog, FieldRecord, FieldValue};
pub use toolkit::{PdfToolkit, Pdftk, ToolError};
