//! Public HTTP server.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, panic recovery, cache headers)
//! - Bind the configured address and serve until shutdown
//!
//! # Design Decisions
//! - Trailing slashes are normalized before routing
//! - Every response carries the request ID for correlation

use std::sync::Arc;

use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{middleware, Router, ServiceExt};
use tokio::net::TcpListener;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::FrontendConfig;
use crate::database::Database;
use crate::lifecycle::{Component, ComponentError, Shutdown};
use crate::observability::metrics;

/// State injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query handle for future business endpoints; unused by the stub.
    pub db: Arc<dyn Database>,
}

/// Public HTTP frontend component.
pub struct HttpFrontend {
    cfg: FrontendConfig,
    router: Router,
}

impl HttpFrontend {
    pub fn new(cfg: FrontendConfig, db: Arc<dyn Database>) -> Self {
        let router = build_router(AppState { db });
        Self { cfg, router }
    }
}

/// Build the Axum router with all middleware layers.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", post(test))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::new())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(
                        "no-cache, no-store, no-transform, must-revalidate, private, max-age=0",
                    ),
                ))
                .layer(middleware::from_fn(metrics::track_requests)),
        )
}

#[async_trait::async_trait]
impl Component for HttpFrontend {
    fn name(&self) -> &str {
        &self.cfg.name
    }

    fn kind(&self) -> &'static str {
        "http"
    }

    async fn run(self, shutdown: Shutdown) -> Result<(), ComponentError> {
        let address = format!("{}:{}", self.cfg.host, self.cfg.port);
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ComponentError::Bind { address, source })?;
        let local_addr = listener.local_addr().map_err(ComponentError::Serve)?;

        tracing::info!(address = %local_addr, "start");

        // Normalization has to wrap the router itself, otherwise route
        // matching sees the unmodified path.
        let app = NormalizePathLayer::trim_trailing_slash().layer(self.router);

        let graceful = {
            let shutdown = shutdown.clone();
            async move { shutdown.cancelled().await }
        };

        axum::serve(listener, ServiceExt::<Request<axum::body::Body>>::into_make_service(app))
            .with_graceful_shutdown(graceful)
            .await
            .map_err(ComponentError::Serve)?;

        tracing::info!("stop");
        Ok(())
    }
}

/// Stub endpoint standing in for future business routes.
async fn test() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Request ID maker producing UUIDv4 values.
#[derive(Clone, Copy)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&uuid::Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}
