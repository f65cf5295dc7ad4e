//! Startup orchestration.
//!
//! # Responsibilities
//! - Merge the first existing env file into the environment (once)
//! - Resolve the immutable server configuration
//!
//! # Design Decisions
//! - A missing or unreadable env file is a warning, not a failure
//! - An invalid PORT is fatal: nothing has been bound yet

use std::path::Path;

use crate::config::{resolve_env_file, ConfigError, EnvFileCandidates, ServerConfig};
use crate::env::Environment;

/// Result of startup preparation.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: ServerConfig,
    pub candidates: EnvFileCandidates,
}

/// Resolve the env file relative to `base` and build the server config.
pub fn prepare(base: &Path, env: &dyn Environment) -> Result<Startup, ConfigError> {
    let candidates = EnvFileCandidates::standard(base, env);

    let env_file = match resolve_env_file(&candidates, env) {
        Ok(Some(path)) => {
            tracing::info!(path = %path.display(), "Loaded env file");
            Some(path)
        }
        Ok(None) => {
            let searched: Vec<String> = candidates
                .paths()
                .iter()
                .flatten()
                .map(|p| p.display().to_string())
                .collect();
            tracing::warn!(?searched, "No env file found, using process environment and defaults");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring env file");
            None
        }
    };

    let mut config = ServerConfig::from_env(env)?;
    config.env_file = env_file;

    tracing::info!(
        bind_address = %config.bind_address(),
        app_name = %config.app.name,
        version = %config.app.version,
        "Configuration loaded"
    );

    Ok(Startup { config, candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_prepare_without_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = MapEnv::new();

        let startup = prepare(dir.path(), &env).unwrap();
        assert_eq!(startup.config, ServerConfig::default());
        assert_eq!(startup.candidates.paths().len(), 4);
    }

    #[test]
    fn test_prepare_reads_values_from_env_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("config")).unwrap();
        let path = dir.path().join("config/.env.deploy");
        std::fs::write(&path, "PORT=4100\nAPP_DEPLOYMENT=canary\nCONTAINER_NAME=web-2\n").unwrap();

        let env: MapEnv = [("PORT", "4200")].into_iter().collect();
        let startup = prepare(dir.path(), &env).unwrap();

        assert_eq!(startup.config.port, 4200);
        assert_eq!(startup.config.app.deployment_id, "canary");
        assert_eq!(startup.config.container, "web-2");
        assert_eq!(startup.config.env_file, Some(path));
    }

    #[test]
    fn test_prepare_invalid_port_from_env_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.deploy"), "PORT=abc\n").unwrap();

        let env = MapEnv::new();
        assert!(matches!(
            prepare(dir.path(), &env),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
