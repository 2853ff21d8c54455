//! `write-forms` command: fill one document per table row

use crate::cli::CommonArgs;
use crate::cli::error::CliError;
use crate::config::FormWriterConfig;
use crate::fill::{BatchOrchestrator, BatchReport, RowFormFiller, RowOutcome};
use crate::import::read_data_rows_from_path;
use crate::toolkit::PdfToolkit;
use std::path::PathBuf;

/// Default PDF template path
pub const DEFAULT_TEMPLATE: &str = "template.pdf";

/// Arguments for the write-forms command
#[derive(Debug, Clone)]
pub struct WriteFormsArgs {
    /// Populated CSV table
    pub table: PathBuf,
    /// PDF template to fill
    pub template: PathBuf,
    /// Output directory, overriding the configuration
    pub output_dir: Option<PathBuf>,
    pub common: CommonArgs,
}

impl WriteFormsArgs {
    pub fn new(table: impl Into<PathBuf>) -> Self {
        Self {
            table: table.into(),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output_dir: None,
            common: CommonArgs::default(),
        }
    }
}

/// Handle the write-forms command using pdftk
pub fn handle_write_forms(args: &WriteFormsArgs) -> Result<(), CliError> {
    let config = args.common.load_config()?;
    let toolkit = config.toolkit();
    toolkit.check_available()?;

    let report = run_write_forms(args, &config, &toolkit)?;
    if report.failed() > 0 {
        eprintln!("⚠️  {} of {} rows failed", report.failed(), report.rows.len());
    }
    Ok(())
}

/// Run write-forms against any toolkit, returning the per-row report
pub fn run_write_forms<T: PdfToolkit>(
    args: &WriteFormsArgs,
    config: &FormWriterConfig,
    toolkit: T,
) -> Result<BatchReport, CliError> {
    if !args.table.exists() {
        return Err(CliError::FileNotFound(args.table.clone()));
    }
    if !args.template.exists() {
        return Err(CliError::FileNotFound(args.template.clone()));
    }

    let rows = read_data_rows_from_path(&args.table)?;

    let mut settings = config.fill_settings();
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| CliError::FileWriteError(dir.clone(), e.to_string()))?;
        settings.output_dir = Some(dir.clone());
    }

    let orchestrator = BatchOrchestrator::new(RowFormFiller::new(toolkit, settings));

    println!("Writing forms for");
    let report = orchestrator.run_with_progress(&rows, &args.template, |row| match &row.outcome {
        RowOutcome::Written(path) => println!("\t{}", path.display()),
        RowOutcome::Skipped(reason) => println!("\t{}", reason),
        RowOutcome::Failed(message) => println!("\tRow {} failed: {}", row.row, message),
    });
    println!("Done!");

    Ok(report)
}
