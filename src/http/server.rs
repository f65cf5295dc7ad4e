//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all diagnostic handler
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener
//! - Stop accepting and drain in-flight connections on shutdown

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::env::Environment;
use crate::http::diagnostic::diagnostic_handler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live environment, read on every request.
    pub env: Arc<dyn Environment>,
}

/// HTTP server for the diagnostic endpoint.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server reading request-time values from `env`.
    pub fn new(env: Arc<dyn Environment>) -> Self {
        let router = Self::build_router(AppState { env });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(diagnostic_handler)
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires (or its sender is dropped).
    ///
    /// On shutdown the listener stops accepting and in-flight connections
    /// are drained with no deadline.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown requested, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
