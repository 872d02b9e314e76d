//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::config::validation::{validate_config, ValidationError};

/// Files probed in the working directory when no explicit path is given.
const CONFIG_FILES: &[&str] = &["config.toml", "config.json"];

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    ParseToml(toml::de::Error),
    ParseJson(serde_json::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseToml(e) => write!(f, "Parse error: {}", e),
            ConfigError::ParseJson(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate the configuration.
///
/// With an explicit `path` the file must exist and parse. Without one the
/// well-known files are probed in order and the first one found is used;
/// if none exists the defaults apply.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => parse_file(path)?,
        None => match CONFIG_FILES.iter().map(Path::new).find(|p| p.exists()) {
            Some(path) => parse_file(path)?,
            None => Config::default(),
        },
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a single config file, choosing the format by extension.
fn parse_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(ConfigError::ParseJson),
        _ => toml::from_str(&content).map_err(ConfigError::ParseToml),
    }
}
