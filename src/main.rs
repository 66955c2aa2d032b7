// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spectral_scan::batch::process_batch;
use spectral_scan::cli::{Cli, Commands};
use spectral_scan::error::AnalysisError;
use spectral_scan::report::analyze_tile;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<AnalysisError>().is_some() => {
            eprintln!("Error reading tile/bands: {e:#}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Analyze { tile } => {
            let summary = analyze_tile(tile, &cli.output)?;
            for mask in &summary.masks {
                println!(
                    "{:<12} {:>10} px  {:>6.2}%",
                    mask.name,
                    mask.pixels,
                    mask.fraction * 100.0
                );
            }
            println!("Report written to {}", cli.output.display());
        }
        Commands::Batch { config } => process_batch(config, &cli.output)?,
    }
    Ok(())
}
