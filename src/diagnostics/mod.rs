//! Internal diagnostics server.
//!
//! # Responsibilities
//! - Serve the profiling surface under `/debug/pprof`
//! - Expose Prometheus metrics on `/metrics`
//!
//! # Design Decisions
//! - Internal-only: bound separately from the public frontend
//! - Profile kinds the runtime cannot produce answer 501 instead of vanishing

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::lifecycle::{Component, ComponentError, Shutdown};
use crate::observability::metrics;

pub mod profile;

/// Diagnostics server component.
pub struct Diagnostics {
    cfg: ServiceConfig,
    router: Router,
}

impl Diagnostics {
    pub fn new(cfg: ServiceConfig) -> Self {
        let recorder = match metrics::install() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to install metrics recorder");
                None
            }
        };

        let router = Router::new()
            .nest("/debug/pprof", profile::router())
            .route("/metrics", get(render_metrics))
            .with_state(recorder);

        Self { cfg, router }
    }
}

#[async_trait::async_trait]
impl Component for Diagnostics {
    fn name(&self) -> &str {
        "debug"
    }

    fn kind(&self) -> &'static str {
        "diagnostics"
    }

    async fn run(self, shutdown: Shutdown) -> Result<(), ComponentError> {
        let address = format!("{}:{}", self.cfg.host, self.cfg.port);
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ComponentError::Bind { address, source })?;
        let local_addr = listener.local_addr().map_err(ComponentError::Serve)?;

        tracing::info!(address = %local_addr, "start");

        let graceful = {
            let shutdown = shutdown.clone();
            async move { shutdown.cancelled().await }
        };

        axum::serve(listener, self.router)
            .with_graceful_shutdown(graceful)
            .await
            .map_err(ComponentError::Serve)?;

        tracing::info!("stop");
        Ok(())
    }
}

async fn render_metrics(State(recorder): State<Option<PrometheusHandle>>) -> impl IntoResponse {
    match recorder {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder unavailable\n").into_response(),
    }
}
