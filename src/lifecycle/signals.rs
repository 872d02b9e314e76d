//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT; Ctrl-C on windows)
//! - Translate signals to the shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Handlers are registered eagerly so a registration failure is a startup error

use crate::lifecycle::shutdown::{Shutdown, ShutdownReason};

/// Install signal handlers and spawn the listener task.
///
/// Must be called from within a Tokio runtime. Returns an error if handler
/// registration fails; after that the listener runs for the life of the
/// process and fires the shutdown signal at most once.
#[cfg(unix)]
pub fn listen(shutdown: Shutdown) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => {
                tracing::info!("received SIGINT");
                shutdown.trigger(ShutdownReason::Interrupt);
            }
            _ = terminate.recv() => {
                tracing::info!("received SIGTERM");
                shutdown.trigger(ShutdownReason::Terminate);
            }
        }
    });

    Ok(())
}

/// Install the Ctrl-C handler and spawn the listener task.
#[cfg(not(unix))]
pub fn listen(shutdown: Shutdown) -> std::io::Result<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("received Ctrl-C");
                shutdown.trigger(ShutdownReason::Interrupt);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for Ctrl-C");
            }
        }
    });

    Ok(())
}
