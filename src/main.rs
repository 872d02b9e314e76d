//! Minimal service scaffold.
//!
//! # Architecture Overview
//! ```text
//!            ┌──────────────────────────────────────────────────┐
//!            │                    SCAFFOLD                      │
//!            │                                                  │
//!            │  ┌────────────┐   ┌────────────┐  ┌───────────┐  │
//!  signals ──┼─▶│ lifecycle  │──▶│ supervisor │─▶│components │  │
//!            │  │ shutdown   │   │ spawn/join │  └─────┬─────┘  │
//!            │  └────────────┘   └────────────┘        │        │
//!            │                          ┌──────────────┼─────┐  │
//!            │                          ▼              ▼     ▼  │
//!            │                   ┌────────────┐ ┌────────┐ ┌──┐ │
//!  scrape ───┼──────────────────▶│diagnostics │ │postgres│ │  │ │
//!            │                   │ pprof+/met │ │ pool   │ │  │ │
//!            │                   └────────────┘ └────────┘ │  │ │
//!  clients ──┼─────────────────────────────────────────────┤  │ │
//!            │                                    frontend │  │ │
//!            │                                   POST /test└──┘ │
//!            └──────────────────────────────────────────────────┘
//! ```
//!
//! Startup order: config → logging → signal handlers → components. Any
//! component's fatal error, or an OS signal, cancels everything; the process
//! exits only after every component has stopped.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use service_scaffold::config;
use service_scaffold::database::Postgres;
use service_scaffold::diagnostics::Diagnostics;
use service_scaffold::frontend::HttpFrontend;
use service_scaffold::lifecycle::{signals, Shutdown, Supervisor};
use service_scaffold::observability::logging;
use service_scaffold::Config;

#[derive(Parser)]
#[command(name = "service-scaffold")]
#[command(about = "Minimal service scaffold", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: config.toml / config.json
    /// in the working directory).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration failure is the one pre-lifecycle fatal: nothing has
    // started yet, so abort with a non-zero exit.
    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config);

    let shutdown = Shutdown::new();
    if let Err(err) = signals::listen(shutdown.clone()) {
        tracing::error!(error = %err, "failed to install signal handlers");
        return ExitCode::FAILURE;
    }

    run(&config, shutdown).await;

    tracing::info!("done");
    ExitCode::SUCCESS
}

/// Construct and supervise all components until shutdown completes.
///
/// Always returns cleanly once the shutdown signal has fired and every
/// component has stopped; a component-triggered failure shuts the process
/// down but does not change the exit code.
async fn run(config: &Config, shutdown: Shutdown) {
    let mut supervisor = Supervisor::new(shutdown);

    let diagnostics = Diagnostics::new(config.service.clone());
    supervisor.spawn(diagnostics);

    let postgres = Postgres::new(config.database.clone());
    let database = postgres.database();
    supervisor.spawn(postgres);

    let frontend = HttpFrontend::new(config.frontend.clone(), database);
    supervisor.spawn(frontend);

    supervisor.run(config.shutdown.grace()).await;
}
