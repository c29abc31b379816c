use clap::Parser;
use colored::*;
use drugtarget::cli::Cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with DRUGTARGET_LOG environment variable support
    let log_level = std::env::var("DRUGTARGET_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = drugtarget::cli::run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<drugtarget::DrugTargetError>() {
            Some(drugtarget::DrugTargetError::InvalidInput(_)) => 2,
            Some(drugtarget::DrugTargetError::NotFound(_)) => 3,
            Some(drugtarget::DrugTargetError::MalformedResponse(_)) => 4,
            Some(drugtarget::DrugTargetError::Timeout(_)) => 5,
            Some(drugtarget::DrugTargetError::Io(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}
