//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All components produce:
//!     → logging.rs (structured log events, component-scoped spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, text or JSON)
//!     → Metrics endpoint (Prometheus scrape via the diagnostics server)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; format and level come from config
//! - No global mutable logger: components get identity fields from their span
//! - Metric updates are cheap (atomic increments)

pub mod logging;
pub mod metrics;
