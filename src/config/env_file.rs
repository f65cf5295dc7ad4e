//! Environment file discovery and loading.
//!
//! # Responsibilities
//! - Build the ordered list of candidate env files
//! - Pick the first candidate that exists on disk
//! - Merge its KEY=VALUE pairs without overriding existing variables
//!
//! # Design Decisions
//! - Later candidates are never inspected once one exists, even if it fails to parse
//! - A file is parsed completely before anything is applied

use std::path::{Path, PathBuf};

use crate::config::loader::ConfigError;
use crate::env::Environment;

/// Ordered env file candidates. The first existing path wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFileCandidates {
    paths: Vec<Option<PathBuf>>,
}

impl EnvFileCandidates {
    pub fn new(paths: Vec<Option<PathBuf>>) -> Self {
        Self { paths }
    }

    /// The standard lookup order, relative to `base`:
    ///
    /// 1. `config/.env.deploy`
    /// 2. `.env.deploy`
    /// 3. `$ENV_FILE_PATH`
    /// 4. `.env.<NODE_ENV>` (`development` when unset)
    pub fn standard(base: &Path, env: &dyn Environment) -> Self {
        let node_env = env
            .non_empty("NODE_ENV")
            .unwrap_or_else(|| "development".to_string());

        Self::new(vec![
            Some(base.join("config").join(".env.deploy")),
            Some(base.join(".env.deploy")),
            env.non_empty("ENV_FILE_PATH").map(PathBuf::from),
            Some(base.join(format!(".env.{node_env}"))),
        ])
    }

    pub fn paths(&self) -> &[Option<PathBuf>] {
        &self.paths
    }

    /// First candidate that exists on disk.
    pub fn select(&self) -> Option<&Path> {
        self.paths
            .iter()
            .flatten()
            .map(PathBuf::as_path)
            .filter(|path| !path.as_os_str().is_empty())
            .find(|path| path.exists())
    }
}

/// Load the first existing env file into `env`.
///
/// Returns the path that was loaded, or `None` when no candidate exists.
pub fn resolve_env_file(
    candidates: &EnvFileCandidates,
    env: &dyn Environment,
) -> Result<Option<PathBuf>, ConfigError> {
    let Some(path) = candidates.select() else {
        return Ok(None);
    };

    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let pairs = dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(to_error)?;

    let mut applied = 0usize;
    for (key, value) in &pairs {
        if env.set_if_absent(key, value) {
            applied += 1;
        }
    }

    tracing::debug!(
        path = %path.display(),
        entries = pairs.len(),
        applied,
        "Env file merged"
    );

    Ok(Some(path.to_path_buf()))
}
