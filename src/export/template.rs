//! CSV table template generation
//!
//! The template has one column per catalog field (identity column first) and a
//! single sample row. The operator fills in one row per document to generate.

use super::ExportError;
use crate::models::{DataRow, FieldCatalog, STATE_OPTION_ATTRIBUTE, field_name};
use rand::seq::SliceRandom;
use std::io::Write;
use std::path::Path;

/// Sample value always used for the identity column
pub const IDENTITY_SAMPLE_VALUE: &str = "Sample";

/// Picks a sample value from a field's allowed options
pub trait SampleChooser {
    /// Choose one of `options`. `options` is never empty.
    fn choose<'a>(&mut self, options: &'a [String]) -> &'a str;
}

impl<C: SampleChooser + ?Sized> SampleChooser for &mut C {
    fn choose<'a>(&mut self, options: &'a [String]) -> &'a str {
        (**self).choose(options)
    }
}

/// Uniformly random choice
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl SampleChooser for RandomChooser {
    fn choose<'a>(&mut self, options: &'a [String]) -> &'a str {
        options
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Always the first option
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstOption;

impl SampleChooser for FirstOption {
    fn choose<'a>(&mut self, options: &'a [String]) -> &'a str {
        options.first().map(String::as_str).unwrap_or_default()
    }
}

/// Header and sample row of a generated template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTemplate {
    pub columns: Vec<String>,
    pub sample: DataRow,
}

impl TableTemplate {
    /// Serialize as CSV with `\n` record terminators
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        writer.write_record(&self.columns)?;
        writer.write_record(
            self.columns
                .iter()
                .map(|column| self.sample.get(column).unwrap_or_default()),
        )?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize to a CSV file, creating parent directories as needed
    pub fn write_to_path(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}

/// Derives a table template from a field catalog
pub struct TemplateTableGenerator<C: SampleChooser> {
    chooser: C,
}

impl TemplateTableGenerator<RandomChooser> {
    /// Generator picking option samples at random
    pub fn random() -> Self {
        Self::new(RandomChooser)
    }
}

impl<C: SampleChooser> TemplateTableGenerator<C> {
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Build the template for a catalog.
    ///
    /// Fields with `FieldStateOption` values get one of those options; the
    /// others get their position in the catalog. The identity column always
    /// gets [`IDENTITY_SAMPLE_VALUE`].
    pub fn generate(&mut self, catalog: &FieldCatalog) -> TableTemplate {
        let mut columns = Vec::with_capacity(catalog.len());
        let mut sample = DataRow::new();

        for (index, record) in catalog.fields().iter().enumerate() {
            let Some(name) = field_name(record) else {
                continue;
            };
            let value = match record.get(STATE_OPTION_ATTRIBUTE) {
                Some(options) if !options.values().is_empty() => {
                    self.chooser.choose(options.values()).to_string()
                }
                _ => index.to_string(),
            };
            columns.push(name.to_string());
            sample.set(name, value);
        }
        sample.set(catalog.identity_column(), IDENTITY_SAMPLE_VALUE);

        TableTemplate { columns, sample }
    }
}
