use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use fastq_samplesheet::app::{App, GlobFileSource, RunOptions};
use fastq_samplesheet::config::{ConfigLoader, ConfigOverrides};
use fastq_samplesheet::error::SheetError;
use fastq_samplesheet::output::{JsonOutput, OutputMode, TextOutput};

#[derive(Parser)]
#[command(name = "fastq-samplesheet")]
#[command(
    about = "Generate samplesheet.csv from FASTQ files and rename SRR runs to group sample names"
)]
#[command(version)]
struct Cli {
    /// JSON config file (default: samplesheet.json in the current directory, if present)
    #[arg(long)]
    config: Option<String>,

    /// Directory to scan for FASTQ files
    #[arg(long)]
    root: Option<Utf8PathBuf>,

    /// Samplesheet destination
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// File name suffix stripped to obtain the sample key
    #[arg(long)]
    suffix: Option<String>,

    /// Build the manifest without writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<SheetError>() {
            return ExitCode::from(err.exit_code());
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let config = ConfigLoader::resolve(cli.config.as_deref())?.apply(ConfigOverrides {
        root_directory: cli.root,
        output_path: cli.output,
        file_suffix: cli.suffix,
    });

    let app = App::new(GlobFileSource);
    let summary = app.run(
        &config,
        RunOptions {
            dry_run: cli.dry_run,
        },
    )?;

    match output_mode {
        OutputMode::Text => TextOutput::print_summary(&summary).into_diagnostic()?,
        OutputMode::Json => JsonOutput::print_summary(&summary).into_diagnostic()?,
    }
    Ok(())
}
