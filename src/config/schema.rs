//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env::Environment;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTAINER: &str = "unknown";

pub const DEFAULT_APP_NAME: &str = "test-cd-app";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_DEPLOYMENT_ID: &str = "local";

/// Application identity and deployment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub deployment_id: String,
}

impl AppInfo {
    /// Derive app metadata from `APP_NAME`, `APP_VERSION`, `APP_ENV` and
    /// `APP_DEPLOYMENT`, falling back to defaults for unset or empty values.
    pub fn from_env(env: &dyn Environment) -> Self {
        let get = |key: &str, default: &str| {
            env.non_empty(key).unwrap_or_else(|| default.to_string())
        };

        Self {
            name: get("APP_NAME", DEFAULT_APP_NAME),
            version: get("APP_VERSION", DEFAULT_APP_VERSION),
            environment: get("APP_ENV", DEFAULT_APP_ENV),
            deployment_id: get("APP_DEPLOYMENT", DEFAULT_DEPLOYMENT_ID),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_APP_VERSION.to_string(),
            environment: DEFAULT_APP_ENV.to_string(),
            deployment_id: DEFAULT_DEPLOYMENT_ID.to_string(),
        }
    }
}

/// Root configuration for the server, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Bind port. 0 asks the OS for an ephemeral port.
    pub port: u16,

    /// App metadata as resolved at startup.
    pub app: AppInfo,

    /// Container name reported by the orchestrator.
    pub container: String,

    /// Env file that was merged into the environment, if any.
    pub env_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            app: AppInfo::default(),
            container: DEFAULT_CONTAINER.to_string(),
            env_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_app_info_defaults() {
        let info = AppInfo::from_env(&MapEnv::new());
        assert_eq!(info.name, "test-cd-app");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.environment, "development");
        assert_eq!(info.deployment_id, "local");
        assert_eq!(info, AppInfo::default());
    }

    #[test]
    fn test_app_info_from_env() {
        let env: MapEnv = [
            ("APP_NAME", "orders"),
            ("APP_VERSION", "2.3.1"),
            ("APP_ENV", "staging"),
            ("APP_DEPLOYMENT", "deploy-42"),
        ]
        .into_iter()
        .collect();

        let info = AppInfo::from_env(&env);
        assert_eq!(info.name, "orders");
        assert_eq!(info.version, "2.3.1");
        assert_eq!(info.environment, "staging");
        assert_eq!(info.deployment_id, "deploy-42");
    }

    #[test]
    fn test_app_info_empty_values_use_defaults() {
        let env: MapEnv = [("APP_NAME", ""), ("APP_VERSION", "9.9.9")]
            .into_iter()
            .collect();

        let info = AppInfo::from_env(&env);
        assert_eq!(info.name, DEFAULT_APP_NAME);
        assert_eq!(info.version, "9.9.9");
    }

    #[test]
    fn test_app_info_serializes_camel_case() {
        let json = serde_json::to_value(AppInfo::default()).unwrap();
        assert_eq!(json["deploymentId"], "local");
        assert!(json.get("deployment_id").is_none());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
