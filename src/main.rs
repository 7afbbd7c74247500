use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use vital_status::{
    ReaderConfig, ValidationConfig, ValidationSummary, diagnose, load_and_validate,
};

/// Validate a patient vital status CSV file
#[derive(Debug, Parser)]
#[command(name = "vital-status", version, about)]
struct Cli {
    /// CSV file with Patient ID, Vital Status, Year of Death, Age at Death, Cause of Death columns
    path: PathBuf,

    /// Validate on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Minimum number of rows before validating in parallel
    #[arg(long, default_value_t = ValidationConfig::default().parallel_threshold)]
    threshold: usize,

    /// Show a progress bar while validating
    #[arg(long)]
    progress: bool,

    /// Print each valid record as a JSON line on stdout
    #[arg(long)]
    json: bool,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let delimiter = u8::try_from(cli.delimiter)
        .with_context(|| format!("Delimiter must be a single byte: {:?}", cli.delimiter))?;
    let reader_config = ReaderConfig {
        delimiter,
        ..Default::default()
    };
    let validation_config = ValidationConfig {
        parallel: !cli.sequential,
        parallel_threshold: cli.threshold,
        show_progress: cli.progress,
    };
    debug!("{reader_config}");
    debug!("{validation_config}");

    let results = load_and_validate(&cli.path, &reader_config, &validation_config)
        .with_context(|| format!("Failed to validate {}", cli.path.display()))?;

    for result in &results {
        match result {
            Ok(record) if cli.json => {
                println!("{}", serde_json::to_string(record)?);
            }
            Ok(_) => {}
            Err(err) => {
                warn!("{err}");
                if let Some(row) = err.row() {
                    for issue in diagnose(row) {
                        debug!("  {}: {issue}", row.patient_id);
                    }
                }
            }
        }
    }

    info!("{}", ValidationSummary::from_results(&results));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
