//! shopctl - compose dispatcher for the shop stack
//!
//! Starts, stops, builds and inspects the backend, gateway and MongoDB
//! services in development or production mode by delegating to
//! `docker compose`.

use anyhow::{Context, Result};
use clap::Parser;
use shopctl_compose::{
    Dispatcher, DryRunExecutor, Executor, HttpProber, StdinConfirmer, SystemExecutor,
};
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

/// Dispatcher wired to real (or dry-run) backends
pub type App = Dispatcher<Box<dyn Executor>, HttpProber, StdinConfirmer>;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity; RUST_LOG wins when set
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    match run(cli).await {
        Ok(code) => process::exit(exit_status(code)),
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let settings = cli.stack.settings();

    let executor: Box<dyn Executor> = if cli.dry_run {
        Box::new(DryRunExecutor::new())
    } else {
        Box::new(SystemExecutor::new())
    };

    let prober =
        HttpProber::new(settings.probe_timeout()).context("Failed to set up health probes")?;
    let app = Dispatcher::new(settings, executor, prober, StdinConfirmer::new());

    commands::dispatch(&app, &cli.stack, cli.command).await
}

/// Map a delegated exit code onto something the OS can report
fn exit_status(code: i32) -> i32 {
    if (0..=255).contains(&code) { code } else { 1 }
}

fn print_version() {
    println!("🛒 shopctl");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Modes:");
    println!("  • development (docker-compose.dev.yml)");
    println!("  • production  (docker-compose.prod.yml)");
}
