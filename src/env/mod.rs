//! Environment variable sources.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     env file (dotenvy) → Environment::set_if_absent (once)
//!
//! Per request:
//!     Environment::var / Environment::vars → AppInfo + filtered snapshot
//! ```
//!
//! # Design Decisions
//! - All reads go through the `Environment` trait, never `std::env` directly
//! - The only write is the startup env-file merge, which never overrides
//! - `MapEnv` backs tests and embedders without touching process state

use std::collections::BTreeMap;
use std::sync::RwLock;

/// A readable (and once-writable) store of environment variables.
pub trait Environment: Send + Sync {
    /// Look up a single variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Snapshot every variable currently in the store.
    fn vars(&self) -> Vec<(String, String)>;

    /// Insert `key` unless it is already present. Returns whether it was inserted.
    fn set_if_absent(&self, key: &str, value: &str) -> bool;

    /// Look up a variable, treating an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        // Non-UTF-8 entries cannot be represented in the JSON snapshot.
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn set_if_absent(&self, key: &str, value: &str) -> bool {
        if std::env::var_os(key).is_some() {
            return false;
        }
        std::env::set_var(key, value);
        true
    }
}

/// An in-memory environment.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<BTreeMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.vars.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.vars.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars: RwLock::new(vars) }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set_if_absent(&self, key: &str, value: &str) -> bool {
        let mut vars = self.write();
        if vars.contains_key(key) {
            return false;
        }
        vars.insert(key.to_string(), value.to_string());
        true
    }
}
