//! CLI binary entry point for form-writer

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use form_writer::cli::CommonArgs;
#[cfg(feature = "cli")]
use form_writer::cli::commands::get_fields::{GetFieldsArgs, handle_get_fields};
#[cfg(feature = "cli")]
use form_writer::cli::commands::write_forms::{WriteFormsArgs, handle_write_forms};
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Autowrite PDF forms from a table of data.
///
/// 1) use get-fields to produce a template spreadsheet (CSV).
///
/// 2) populate the spreadsheet with one row per form to write, and save it as CSV.
///
/// 3) use write-forms on the completed spreadsheet.
#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "form-writer")]
#[command(version)]
struct Cli {
    /// Configuration file (default: .form-writer.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// pdftk executable
    #[arg(long, global = true)]
    pdftk: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Parse a PDF to identify each field and write a template spreadsheet
    GetFields {
        /// PDF template to inspect
        template: PathBuf,
        /// Name of the CSV table template file
        #[arg(short, long, default_value = "entries.csv")]
        output: PathBuf,
        /// File listing every field and its parameters
        #[arg(short, long = "fields-save", default_value = "fields.txt")]
        fields_save: PathBuf,
        /// Also write a sample form, useful for cross-referencing fields
        #[arg(short, long)]
        sample: bool,
    },
    /// Write a table of form values to PDF files
    WriteForms {
        /// Populated CSV table
        table_file: PathBuf,
        /// PDF template which is to be populated
        #[arg(long, default_value = "template.pdf")]
        template: PathBuf,
        /// Directory for generated documents (default: the template's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let common = CommonArgs {
        config: cli.config,
        pdftk: cli.pdftk,
    };

    let result = match cli.command {
        Commands::GetFields {
            template,
            output,
            fields_save,
            sample,
        } => {
            let args = GetFieldsArgs {
                template,
                output,
                fields_save,
                sample,
                common,
            };
            handle_get_fields(&args)
        }
        Commands::WriteForms {
            table_file,
            template,
            output_dir,
        } => {
            let args = WriteFormsArgs {
                table: table_file,
                template,
                output_dir,
                common,
            };
            handle_write_forms(&args)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
