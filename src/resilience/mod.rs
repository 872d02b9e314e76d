//! Resilience primitives.
//!
//! # Design Decisions
//! - Backoff is pure exponential doubling, no jitter and no cap
//! - Retry waits race against the shutdown signal, never a bare sleep
//! - Exhaustion and cancellation are distinct errors so callers can log them apart

pub mod backoff;

pub use backoff::{retry, RetryError, RetryPolicy};
