//! Component supervision.
//!
//! Each top-level component (diagnostics server, database manager, HTTP
//! frontend) implements [`Component`] and is launched as its own task. The
//! supervisor waits for the shared shutdown signal, then joins every task
//! before returning, so no component is still holding a listener or a pool
//! when the process exits.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::Instrument;

use crate::lifecycle::shutdown::{Shutdown, ShutdownReason};

/// Fatal errors a component can report from its run loop.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A listening address could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The database connection could not be established.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The serve loop failed for a reason other than graceful shutdown.
    #[error("serve failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// A long-running part of the process with a uniform lifecycle.
///
/// `run` owns the component until it stops. It must begin an orderly
/// shutdown promptly once `shutdown` fires and release everything it
/// acquired on every exit path. Returning an error marks the failure as
/// fatal for the whole process: the supervisor logs it and triggers the
/// shared shutdown signal so sibling components unwind too.
#[async_trait]
pub trait Component: Send + 'static {
    /// Instance name, used as a static log field.
    fn name(&self) -> &str;

    /// Component kind, used as a static log field.
    fn kind(&self) -> &'static str;

    async fn run(self, shutdown: Shutdown) -> Result<(), ComponentError>;
}

/// Launches components and coordinates their shutdown.
pub struct Supervisor {
    shutdown: Shutdown,
    components: Vec<(String, JoinHandle<()>)>,
}

impl Supervisor {
    pub fn new(shutdown: Shutdown) -> Self {
        Self {
            shutdown,
            components: Vec::new(),
        }
    }

    /// Launch a component on its own task.
    ///
    /// The task runs inside a span carrying the component's identity, so
    /// every log line the component emits is attributed to it without any
    /// global logger state.
    pub fn spawn<C: Component>(&mut self, component: C) {
        let name = component.name().to_string();
        let span = tracing::info_span!(
            "component",
            kind = component.kind(),
            name = %name,
        );
        let shutdown = self.shutdown.clone();

        let handle = tokio::spawn(
            async move {
                if let Err(err) = component.run(shutdown.clone()).await {
                    tracing::error!(error = %err, "component failed");
                    shutdown.trigger(ShutdownReason::ComponentFailure);
                }
            }
            .instrument(span),
        );

        self.components.push((name, handle));
    }

    /// Block until the shutdown signal fires, then join every component.
    ///
    /// Components get `grace` to unwind cooperatively. A component that is
    /// still running after the deadline is logged and aborted; its handle is
    /// awaited afterwards so completion is observed even for stragglers.
    pub async fn run(self, grace: Duration) {
        self.shutdown.cancelled().await;
        tracing::info!(reason = ?self.shutdown.reason(), "shutting down");

        let deadline = Instant::now() + grace;
        for (name, mut handle) in self.components {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match tokio::time::timeout(remaining, &mut handle).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::error!(component = %name, error = %err, "component task panicked");
                }
                Err(_) => {
                    tracing::error!(
                        component = %name,
                        grace = ?grace,
                        "component did not stop within grace period, aborting"
                    );
                    handle.abort();
                    let _ = handle.await;
                }
            }
        }

        tracing::info!("all components stopped");
    }
}
