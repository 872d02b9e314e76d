//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Select output format (text or JSON) from config
//! - Derive the default level from the debug/trace flags
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the config-derived level when set
//! - JSON output for machine parsing, text for terminals

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Initialize the global tracing subscriber.
///
/// Call once, before any component starts; later calls would panic the way
/// any double subscriber installation does.
pub fn init(config: &Config) {
    let default_level = if config.trace {
        "trace"
    } else if config.debug {
        "debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}
