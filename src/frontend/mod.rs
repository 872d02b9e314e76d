//! Public-facing frontend subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → http.rs (Axum router, middleware stack)
//!     → stub handlers (business endpoints land here later)
//! ```
//!
//! # Design Decisions
//! - The frontend receives the database as a trait object, never the pool
//! - Shutdown is graceful: stop accepting, drain in-flight, then return

pub mod http;

pub use http::HttpFrontend;
