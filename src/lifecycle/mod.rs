//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Construct components → Supervisor spawns each
//!
//! Shutdown (shutdown.rs):
//!     Signal received OR component failure → Shutdown fires → components unwind
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//!
//! Supervisor (supervisor.rs):
//!     One task per component → wait for shutdown → join all, abort stragglers
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative: components observe the signal and unwind
//! - Any component's fatal error cancels the whole process (no partial mode)
//! - The supervisor never returns before every component task has finished
//! - Join has a configurable grace period: stragglers are aborted, not waited on forever

pub mod shutdown;
pub mod signals;
pub mod supervisor;

pub use shutdown::{Shutdown, ShutdownReason};
pub use supervisor::{Component, ComponentError, Supervisor};
