//! Deployment diagnostics server library.

pub mod config;
pub mod env;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{AppInfo, ServerConfig};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
