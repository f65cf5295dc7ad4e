//! Configuration loading from the environment.

use std::path::PathBuf;

use crate::config::schema::{AppInfo, ServerConfig, DEFAULT_CONTAINER, DEFAULT_HOST, DEFAULT_PORT};
use crate::env::Environment;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid PORT value {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Resolve the server configuration from the environment.
    ///
    /// Call after the env file has been merged; `env_file` is left unset
    /// for the caller to record.
    pub fn from_env(env: &dyn Environment) -> Result<Self, ConfigError> {
        let host = env
            .non_empty("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env.non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let container = env
            .non_empty("CONTAINER_NAME")
            .unwrap_or_else(|| DEFAULT_CONTAINER.to_string());

        Ok(Self {
            host,
            port,
            app: AppInfo::from_env(env),
            container,
            env_file: None,
        })
    }
}
