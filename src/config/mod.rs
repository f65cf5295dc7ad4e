//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! EnvFileCandidates (ordered)
//!     → env_file.rs (first existing file, merged without overriding)
//!     → process environment
//!     → loader.rs (HOST, PORT, APP_*, CONTAINER_NAME + defaults)
//!     → ServerConfig (resolved once, immutable)
//! ```
//!
//! # Design Decisions
//! - The env file is resolved exactly once, before the listener binds
//! - Empty variables count as unset and fall back to defaults
//! - `AppInfo` is re-derived per request from the live environment;
//!   `ServerConfig.app` is only the startup snapshot used for logging

pub mod env_file;
pub mod loader;
pub mod schema;

pub use env_file::{resolve_env_file, EnvFileCandidates};
pub use loader::ConfigError;
pub use schema::{AppInfo, ServerConfig};
