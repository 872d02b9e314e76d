//! Profiling endpoints.
//!
//! Route layout mirrors the conventional `/debug/pprof` surface so existing
//! tooling can point at it unchanged. CPU profiles are sampled on demand
//! (unix only); the other profile kinds have no producer in this runtime and
//! answer 501.

use axum::routing::get;
use axum::Router;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/profile", get(cpu::profile))
        .route("/trace", get(unavailable))
        .route("/heap", get(unavailable))
        .route("/goroutine", get(unavailable))
        .route("/allocs", get(unavailable))
}

async fn unavailable() -> (axum::http::StatusCode, &'static str) {
    (
        axum::http::StatusCode::NOT_IMPLEMENTED,
        "profile kind not available in this runtime\n",
    )
}

#[cfg(unix)]
mod cpu {
    use std::time::Duration;

    use axum::extract::Query;
    use axum::http::{header, StatusCode};
    use axum::response::{IntoResponse, Response};
    use pprof::protos::Message;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct ProfileParams {
        /// Sampling window in seconds.
        seconds: Option<u64>,
    }

    /// Sample the CPU for the requested window and return a pprof protobuf.
    pub async fn profile(Query(params): Query<ProfileParams>) -> Response {
        let seconds = params.seconds.unwrap_or(30);

        let result = tokio::task::spawn_blocking(move || sample(seconds)).await;
        match result {
            Ok(Ok(body)) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/octet-stream")],
                body,
            )
                .into_response(),
            Ok(Err(err)) => {
                tracing::error!(error = %err, "cpu profile failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "profiling failed\n").into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "cpu profile task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "profiling failed\n").into_response()
            }
        }
    }

    fn sample(seconds: u64) -> Result<Vec<u8>, pprof::Error> {
        let guard = pprof::ProfilerGuardBuilder::default()
            .frequency(99)
            .blocklist(&["libc", "libgcc", "pthread", "vdso"])
            .build()?;
        std::thread::sleep(Duration::from_secs(seconds));
        let profile = guard.report().build()?.pprof()?;
        Ok(profile.encode_to_vec())
    }
}

#[cfg(not(unix))]
mod cpu {
    pub async fn profile() -> (axum::http::StatusCode, &'static str) {
        super::unavailable().await
    }
}
