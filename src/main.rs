use clap::Parser;
use colored::*;
use primehunt::cli::Cli;
use primehunt::{PrimeSearch, PrimehuntError};
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with PRIMEHUNT_LOG environment variable support
    let log_level = std::env::var("PRIMEHUNT_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<PrimehuntError>() {
            Some(PrimehuntError::Config(_)) => 2,
            Some(PrimehuntError::Io(_)) => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    if cli.verbose > 0 {
        eprintln!(
            "Searching for primes in [0, {}) on slices of {} with up to {} workers",
            config.range,
            config.slice_size,
            config.resolved_concurrency()
        );
    }

    let search = PrimeSearch::new(config)?;

    let started = Instant::now();
    let primes = search.run()?;
    let elapsed = started.elapsed();

    println!("{:?}", primes);
    println!("\nFound {} primes in {}ms", primes.len(), elapsed.as_millis());

    Ok(())
}
