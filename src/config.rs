//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
const CREDENTIALS_DIR_NAME: &str = ".hearth";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("home directory not found — set HEARTH_CREDENTIALS_DIR")]
    NoHomeDir,
}

/// Typed configuration for the session core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Directory holding the persisted credential file.
    pub credentials_dir: PathBuf,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `HEARTH_API_URL`: base URL of the REST API (default `http://localhost:3000`)
    /// - `HEARTH_CREDENTIALS_DIR`: directory for the persisted credential
    ///   (default `~/.hearth`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` when no credentials directory is
    /// configured and the home directory cannot be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("HEARTH_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let credentials_dir = match std::env::var("HEARTH_CREDENTIALS_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .map(|home| home.join(CREDENTIALS_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir)?,
        };

        Ok(Self { api_url, credentials_dir })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
