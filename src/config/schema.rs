//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the scaffold.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Enable debug-level logging.
    pub debug: bool,

    /// Enable trace-level logging (takes precedence over `debug`).
    pub trace: bool,

    /// Log output format.
    pub log_format: LogFormat,

    /// Diagnostics server binding.
    pub service: ServiceConfig,

    /// Database connection parameters.
    pub database: DatabaseConfig,

    /// Public HTTP frontend binding.
    pub frontend: FrontendConfig,

    /// Shutdown behavior.
    pub shutdown: ShutdownConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable console output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Diagnostics server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Host to bind the diagnostics server to.
    pub host: String,

    /// Port to bind the diagnostics server to.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
        }
    }
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database name.
    pub name: String,

    /// SSL mode (`disable`, `allow`, `prefer`, `require`, `verify-ca`, `verify-full`).
    pub ssl_mode: String,

    /// Path to the SSL root certificate, if any.
    pub ssl_cert_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "postgres".to_string(),
            ssl_mode: "disable".to_string(),
            ssl_cert_path: String::new(),
        }
    }
}

/// Public HTTP frontend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Instance name, used as a static log field.
    pub name: String,

    /// Host to bind the public server to.
    pub host: String,

    /// Port to bind the public server to.
    pub port: u16,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds components get to unwind after the shutdown signal before
    /// they are aborted.
    pub grace_secs: u64,
}

impl ShutdownConfig {
    pub fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 30 }
    }
}
