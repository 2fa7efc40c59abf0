//! Service configuration loaded from a JSON file.
//!
//! The file uses camelCase keys:
//!
//! ```json
//! {
//!   "inMemory": false,
//!   "dbFilePath": "players.db",
//!   "port": "8080",
//!   "cbsApiUrl": "https://api.cbssports.com/fantasy/players/list?SPORT={{SPORT}}&response_format=JSON",
//!   "sports": ["baseball", "football", "basketball"],
//!   "importBatchSize": 100
//! }
//! ```
//!
//! A few values can be overridden from the environment, see [`PORT_ENV_VAR`],
//! [`DB_FILE_PATH_ENV_VAR`] and [`IN_MEMORY_ENV_VAR`].

use crate::error::ConfigError;
use crate::storage::queries::MAX_INSERT_BATCH;
use serde::Deserialize;
use std::path::Path;

/// Storage target used when the database lives in memory.
pub const IN_MEMORY_SOURCE: &str = ":memory:";

/// Placeholder substituted with a sport name in [`Config::cbs_api_url`].
pub const SPORT_PLACEHOLDER: &str = "{{SPORT}}";

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub const PORT_ENV_VAR: &str = "PLAYERS_API_PORT";
pub const DB_FILE_PATH_ENV_VAR: &str = "PLAYERS_API_DB_FILE_PATH";
pub const IN_MEMORY_ENV_VAR: &str = "PLAYERS_API_IN_MEMORY";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub in_memory: bool,
    #[serde(default)]
    pub db_file_path: String,
    pub port: String,
    pub cbs_api_url: String,
    #[serde(default)]
    pub sports: Vec<String>,
    pub import_batch_size: usize,
}

impl Config {
    /// Read, override from the process environment, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the file as-is, without overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides using `lookup` to resolve variable names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV_VAR) {
            self.port = port;
        }

        if let Some(path) = lookup(DB_FILE_PATH_ENV_VAR) {
            self.db_file_path = path;
        }

        if let Some(raw) = lookup(IN_MEMORY_ENV_VAR) {
            self.in_memory = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::Invalid {
                        message: format!("{IN_MEMORY_ENV_VAR} must be a boolean, got '{other}'"),
                    })
                }
            };
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.import_batch_size == 0 {
            return Err(invalid("importBatchSize must be greater than 0"));
        }
        if self.import_batch_size > MAX_INSERT_BATCH {
            return Err(invalid(&format!(
                "importBatchSize must be at most {MAX_INSERT_BATCH}, got {}",
                self.import_batch_size
            )));
        }
        if self.port.trim().is_empty() {
            return Err(invalid("port must not be empty"));
        }
        if !self.cbs_api_url.contains(SPORT_PLACEHOLDER) {
            return Err(invalid(&format!(
                "cbsApiUrl must contain the {SPORT_PLACEHOLDER} placeholder"
            )));
        }
        if !self.in_memory && self.db_file_path.trim().is_empty() {
            return Err(invalid("dbFilePath is required unless inMemory is set"));
        }
        Ok(())
    }

    /// Effective storage target: the file path, or [`IN_MEMORY_SOURCE`].
    pub fn db_source(&self) -> &str {
        if self.in_memory {
            IN_MEMORY_SOURCE
        } else {
            &self.db_file_path
        }
    }

    /// Address the HTTP server listens on (all interfaces).
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port.trim())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid {
        message: message.to_string(),
    }
}
