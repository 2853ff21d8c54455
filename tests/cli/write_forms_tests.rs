//! write-forms command tests

use crate::common::RecordingToolkit;
use form_writer::cli::CliError;
use form_writer::cli::commands::write_forms::{WriteFormsArgs, run_write_forms};
use form_writer::config::FormWriterConfig;
use form_writer::fill::RowOutcome;
use tempfile::TempDir;

fn setup(table: &str) -> (TempDir, WriteFormsArgs, FormWriterConfig) {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("invoice.pdf");
    std::fs::write(&template, b"%PDF-1.4\n").unwrap();
    let table_path = dir.path().join("entries.csv");
    std::fs::write(&table_path, table).unwrap();

    let mut args = WriteFormsArgs::new(table_path);
    args.template = template;

    let mut config = FormWriterConfig::new();
    config.fill.intermediate_file = dir.path().join("data.fdf");
    (dir, args, config)
}

#[test]
fn test_cli_write_forms_batch() {
    let (dir, args, config) = setup(
        "form-writer form id,Name,Age\nA,Ada,Old\n,Nobody,Young\nC,Cy,Young\n",
    );
    let toolkit = RecordingToolkit::new("");

    let report = run_write_forms(&args, &config, &toolkit).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.skipped(), 1);
    assert!(dir.path().join("invoice - A.pdf").exists());
    assert!(dir.path().join("invoice - C.pdf").exists());
    assert!(!dir.path().join("data.fdf").exists());
}

#[test]
fn test_cli_write_forms_output_dir() {
    let (dir, mut args, config) = setup("form-writer form id,Name\n1,Ada\n");
    args.output_dir = Some(dir.path().join("generated"));
    let toolkit = RecordingToolkit::new("");

    let report = run_write_forms(&args, &config, &toolkit).unwrap();

    assert_eq!(
        report.rows[0].outcome,
        RowOutcome::Written(dir.path().join("generated").join("invoice - 1.pdf"))
    );
    assert!(dir.path().join("generated").join("invoice - 1.pdf").exists());
}

#[test]
fn test_cli_write_forms_continues_after_failed_row() {
    let (_dir, args, config) = setup("form-writer form id,Name\nok1,Ada\nbroken,Bob\nok2,Cy\n");
    let toolkit = RecordingToolkit::new("").failing_on("broken");

    let report = run_write_forms(&args, &config, &toolkit).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.rows[1].outcome, RowOutcome::Failed(_)));
}

#[test]
fn test_cli_write_forms_missing_table() {
    let (dir, mut args, config) = setup("form-writer form id\n");
    args.table = dir.path().join("nope.csv");
    let toolkit = RecordingToolkit::new("");

    let result = run_write_forms(&args, &config, &toolkit);
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
}

#[test]
fn test_cli_write_forms_missing_template() {
    let (dir, mut args, config) = setup("form-writer form id\n");
    args.template = dir.path().join("nope.pdf");
    let toolkit = RecordingToolkit::new("");

    let result = run_write_forms(&args, &config, &toolkit);
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
    assert!(toolkit.calls().is_empty());
}
