//! `get-fields` command: discover fields and write the table template

use crate::cli::CommonArgs;
use crate::cli::error::CliError;
use crate::config::FormWriterConfig;
use crate::export::listing::write_field_listing_to_path;
use crate::export::{RandomChooser, SampleChooser, TemplateTableGenerator};
use crate::fill::{FillOutcome, RowFormFiller};
use crate::import::FieldCatalogBuilder;
use crate::toolkit::PdfToolkit;
use std::path::PathBuf;

/// Default table template path
pub const DEFAULT_TABLE_TEMPLATE: &str = "entries.csv";

/// Default field listing path
pub const DEFAULT_FIELD_LISTING: &str = "fields.txt";

/// Arguments for the get-fields command
#[derive(Debug, Clone)]
pub struct GetFieldsArgs {
    /// PDF template to inspect
    pub template: PathBuf,
    /// CSV table template to write
    pub output: PathBuf,
    /// Field listing to write
    pub fields_save: PathBuf,
    /// Also fill a sample document from the sample row
    pub sample: bool,
    pub common: CommonArgs,
}

impl GetFieldsArgs {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: PathBuf::from(DEFAULT_TABLE_TEMPLATE),
            fields_save: PathBuf::from(DEFAULT_FIELD_LISTING),
            sample: false,
            common: CommonArgs::default(),
        }
    }
}

/// Handle the get-fields command using pdftk
pub fn handle_get_fields(args: &GetFieldsArgs) -> Result<(), CliError> {
    let config = args.common.load_config()?;
    let toolkit = config.toolkit();
    toolkit.check_available()?;
    run_get_fields(args, &config, &toolkit, RandomChooser)
}

/// Run get-fields against any toolkit and sample chooser
pub fn run_get_fields<T, C>(
    args: &GetFieldsArgs,
    config: &FormWriterConfig,
    toolkit: T,
    chooser: C,
) -> Result<(), CliError>
where
    T: PdfToolkit,
    C: SampleChooser,
{
    if !args.template.exists() {
        return Err(CliError::FileNotFound(args.template.clone()));
    }

    println!("form-writer - get fields");
    println!("\ttemplate: <{}>", args.template.display());

    let dump = toolkit.dump_fields(&args.template)?;
    let catalog = FieldCatalogBuilder::new()
        .with_identity_column(config.fill.identity_column.clone())
        .build(&dump)?;

    write_field_listing_to_path(&catalog, &args.fields_save)
        .map_err(|e| CliError::FileWriteError(args.fields_save.clone(), e.to_string()))?;

    println!("\n\tFound {} fields", catalog.discovered().len());
    println!(
        "\tA printout of field parameters was written to <{}>",
        args.fields_save.display()
    );

    let template = TemplateTableGenerator::new(chooser).generate(&catalog);
    template
        .write_to_path(&args.output)
        .map_err(|e| CliError::FileWriteError(args.output.clone(), e.to_string()))?;

    println!(
        "\tTable Template has been written to <{}>",
        args.output.display()
    );

    if args.sample {
        let filler = RowFormFiller::new(toolkit, config.fill_settings());
        match filler.fill(&template.sample, &args.template)? {
            FillOutcome::Written(path) => {
                println!("\tSample form has been written to <{}>", path.display());
            }
            FillOutcome::Skipped(reason) => println!("\t{}", reason),
        }
    }

    Ok(())
}
