//! Minimal service scaffold library.

pub mod config;
pub mod database;
pub mod diagnostics;
pub mod frontend;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::Config;
pub use database::Database;
pub use lifecycle::{Component, ComponentError, Shutdown, ShutdownReason, Supervisor};
