//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `domain_records` library: parses command-line
//! arguments, initializes the logger, runs the lookup pipeline, and prints the
//! rendered report. All core functionality lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_records::initialization::init_logger_with;
use domain_records::{render_json, render_text, run_lookup, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_and_render(&config).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_records error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run_and_render(config: &Config) -> Result<String> {
    let report = run_lookup(config).await?;
    match OutputFormat::from_tag(&config.format) {
        OutputFormat::Stdout => Ok(render_text(&report)),
        OutputFormat::Json => Ok(format!("{}\n", render_json(&report)?)),
    }
}
