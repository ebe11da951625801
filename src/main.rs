mod agents;
mod cli;
mod error;
mod gomod;
mod toolchain;
mod utils;
mod workflow;

use agents::{ApplyOutcome, GoExecutionAgent};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let toolchain = GoExecutionAgent::new(&cli.go);
    let mut stdout = std::io::stdout().lock();
    let result = workflow::execute_merge(
        &toolchain,
        &cli.path,
        &cli.modfile,
        cli.dry_run,
        &mut stdout,
    );
    drop(stdout);

    match result {
        Ok(ApplyOutcome::Applied(pins)) => info!(count = pins.len(), "go.mod updated"),
        Ok(ApplyOutcome::Planned(pins)) => info!(count = pins.len(), "dry run finished"),
        Ok(ApplyOutcome::UpToDate) => {}
        Err(e) => {
            match error::details(&e) {
                Some(details) => eprintln!("{} {} ({})", "Error:".red().bold(), e, details),
                None => eprintln!("{} {}", "Error:".red().bold(), e),
            }
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gomodmerge=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
