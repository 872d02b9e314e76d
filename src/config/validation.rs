//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and enumerated string fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use crate::config::schema::Config;

/// SSL modes PostgreSQL understands.
const SSL_MODES: &[&str] = &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

/// A single semantic problem with the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField(&'static str),
    UnknownSslMode(String),
    ZeroGracePeriod,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{} must not be empty", field),
            ValidationError::UnknownSslMode(mode) => {
                write!(f, "unknown database.ssl_mode {:?}", mode)
            }
            ValidationError::ZeroGracePeriod => write!(f, "shutdown.grace_secs must be at least 1"),
        }
    }
}

/// Check the configuration for semantic problems.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.database.host.is_empty() {
        errors.push(ValidationError::EmptyField("database.host"));
    }
    if config.database.user.is_empty() {
        errors.push(ValidationError::EmptyField("database.user"));
    }
    if config.database.name.is_empty() {
        errors.push(ValidationError::EmptyField("database.name"));
    }
    if !SSL_MODES.contains(&config.database.ssl_mode.as_str()) {
        errors.push(ValidationError::UnknownSslMode(config.database.ssl_mode.clone()));
    }
    if config.shutdown.grace_secs == 0 {
        errors.push(ValidationError::ZeroGracePeriod);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
