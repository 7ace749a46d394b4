use clap::Parser;
use concordance_cli::args::Args;
use concordance_cli::config::Config;
use concordance_cli::error::{AppError, Result};
use concordance_cli::presentation;
use concordance_core::Concordance;
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    // Convert args to engine::Config
    let config = Config::from(args);
    debug!("effective config: {config:?}");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ AppError::Engine(_)) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Output Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let concordance: Concordance = concordance_engine::run(config)?;
    presentation::emit(&concordance, config)
}
