//! get-fields command tests

use crate::common::{NAME_AGE_DUMP, RecordingToolkit};
use form_writer::cli::CliError;
use form_writer::cli::commands::get_fields::{GetFieldsArgs, run_get_fields};
use form_writer::config::FormWriterConfig;
use form_writer::export::FirstOption;
use form_writer::import::ImportError;
use tempfile::TempDir;

fn setup() -> (TempDir, GetFieldsArgs) {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.pdf");
    std::fs::write(&template, b"%PDF-1.4\n").unwrap();

    let mut args = GetFieldsArgs::new(template);
    args.output = dir.path().join("entries.csv");
    args.fields_save = dir.path().join("fields.txt");
    (dir, args)
}

fn config_in(dir: &TempDir) -> FormWriterConfig {
    let mut config = FormWriterConfig::new();
    config.fill.intermediate_file = dir.path().join("data.fdf");
    config
}

#[test]
fn test_cli_get_fields_writes_template_and_listing() {
    let (dir, args) = setup();
    let toolkit = RecordingToolkit::new(NAME_AGE_DUMP);

    let result = run_get_fields(&args, &config_in(&dir), &toolkit, FirstOption);
    assert!(result.is_ok(), "get-fields should succeed: {:?}", result.err());

    let csv = std::fs::read_to_string(&args.output).unwrap();
    assert_eq!(csv, "form-writer form id,Name,Age\nSample,1,Young\n");

    let listing = std::fs::read_to_string(&args.fields_save).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Field Name\tField Description");
    assert!(lines[1].starts_with("Name\t{"));
    assert!(lines[2].starts_with("Age\t{"));

    assert!(toolkit.calls().is_empty(), "no sample requested");
}

#[test]
fn test_cli_get_fields_with_sample() {
    let (dir, mut args) = setup();
    args.sample = true;
    let toolkit = RecordingToolkit::new(NAME_AGE_DUMP);

    run_get_fields(&args, &config_in(&dir), &toolkit, FirstOption).unwrap();

    let calls = toolkit.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].output, dir.path().join("template - Sample.pdf"));
    assert!(dir.path().join("template - Sample.pdf").exists());
    assert!(!dir.path().join("data.fdf").exists());
}

#[test]
fn test_cli_get_fields_missing_template() {
    let (dir, mut args) = setup();
    args.template = dir.path().join("missing.pdf");
    let toolkit = RecordingToolkit::new(NAME_AGE_DUMP);

    let result = run_get_fields(&args, &config_in(&dir), &toolkit, FirstOption);
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
}

#[test]
fn test_cli_get_fields_malformed_dump_is_fatal() {
    let (dir, args) = setup();
    let toolkit = RecordingToolkit::new("---\r\nFieldType: Text\r\n");

    let result = run_get_fields(&args, &config_in(&dir), &toolkit, FirstOption);
    assert!(matches!(
        result,
        Err(CliError::ImportError(ImportError::MissingFieldName { block: 1 }))
    ));
    assert!(!args.output.exists());
}

#[test]
fn test_cli_get_fields_custom_identity_column() {
    let (dir, args) = setup();
    let mut config = config_in(&dir);
    config.fill.identity_column = "Form ID".to_string();
    let toolkit = RecordingToolkit::new(NAME_AGE_DUMP);

    run_get_fields(&args, &config, &toolkit, FirstOption).unwrap();

    let csv = std::fs::read_to_string(&args.output).unwrap();
    assert!(csv.starts_with("Form ID,Name,Age\n"));
}
