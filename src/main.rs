//! Deployment diagnostics server.
//!
//! Answers every HTTP request with a JSON snapshot of the application's
//! identity, deployment metadata and the `APP_*` part of its environment.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                    DEPLOY-INFO SERVER                     │
//!   │                                                          │
//!   │  env files ──▶ ┌─────────┐    ┌──────────────┐           │
//!   │                │ config  │───▶│ ServerConfig │           │
//!   │  process env ─▶└─────────┘    └──────┬───────┘           │
//!   │       │                              │ bind              │
//!   │       │ per request                  ▼                   │
//!   │       │                       ┌──────────────┐           │
//!   │       └──────────────────────▶│ http server  │◀── Client │
//!   │                               │ (diagnostic) │──▶ JSON   │
//!   │                               └──────▲───────┘           │
//!   │                                      │ drain             │
//!   │                 SIGTERM ──▶ ┌────────┴──┐                │
//!   │                 SIGINT  ──▶ │ lifecycle │                │
//!   │                             └───────────┘                │
//!   └──────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;

use deploy_info::env::{Environment, ProcessEnv};
use deploy_info::http::HttpServer;
use deploy_info::lifecycle::{self, Shutdown};
use deploy_info::observability::{init_logging, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogFormat::from_env());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "deploy-info starting");

    let env: Arc<dyn Environment> = Arc::new(ProcessEnv);
    let base = std::env::current_dir()?;
    let startup = lifecycle::prepare(&base, env.as_ref())?;
    let config = startup.config;

    // Handlers go in before the bind so an early SIGTERM still drains.
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    lifecycle::spawn_signal_listener(shutdown.clone())?;

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %format!("http://{local_addr}/"),
        environment = %config.app.environment,
        deployment_id = %config.app.deployment_id,
        container = %config.container,
        "Server running"
    );

    let server = HttpServer::new(env);
    server.run(listener, server_shutdown).await?;

    tracing::info!("HTTP server closed");
    Ok(())
}
