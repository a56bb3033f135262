//! Command-line interface for the catalog checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::checker::check_source;
use crate::config::InputFormat;
use crate::error::{CatalogError, Result};
use crate::report::{render_json, render_text};
use crate::source::FileCatalogSource;

/// Catalog numbering checker - Validate dotted section numbering per document.
#[derive(Parser)]
#[command(name = "catalog-numbering")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the numbering hierarchy of every document in a catalog file.
    Check {
        /// Catalog file (JSON or YAML array of records)
        input: PathBuf,

        /// Input format (default: detected from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<InputFormatArg>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        report: ReportFormat,

        /// Exit with an error status when any numbering error is found
        #[arg(long)]
        strict: bool,
    },
}

/// Input format as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    Json,
    Yaml,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => Self::Json,
            InputFormatArg::Yaml => Self::Yaml,
        }
    }
}

/// Output format for the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            format,
            report,
            strict,
        } => check_command(input, format, report, strict),
    }
}

/// Execute the check command.
fn check_command(
    input: PathBuf,
    format: Option<InputFormatArg>,
    report_format: ReportFormat,
    strict: bool,
) -> Result<()> {
    let source = match format {
        Some(format) => FileCatalogSource::with_format(input, format.into()),
        None => FileCatalogSource::new(input)?,
    };

    if report_format == ReportFormat::Text {
        println!(
            "{} {}",
            style("Checking").bold(),
            style(source.path().display()).cyan()
        );
        println!();
    }

    let report = check_source(&source)?;

    match report_format {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => println!("{}", render_json(&report)?),
    }

    if strict && !report.is_clean() {
        return Err(CatalogError::CheckFailed {
            count: report.error_count(),
        });
    }

    Ok(())
}
