//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): total requests by method, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - The Prometheus recorder is installed once; the handle is shared
//! - Rendering happens on scrape via the diagnostics server

use std::sync::OnceLock;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and return a handle for rendering.
///
/// Safe to call more than once; the first installation wins.
pub fn install() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Ok(HANDLE.get_or_init(|| handle).clone()),
        // A racing install got there first; its handle serves the same recorder.
        Err(err) => match HANDLE.get() {
            Some(handle) => Ok(handle.clone()),
            None => Err(err),
        },
    }
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, started: Instant) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!("http_request_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Axum middleware that records request metrics.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    record_request(method.as_str(), response.status().as_u16(), started);
    response
}
