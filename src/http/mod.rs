//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, graceful shutdown)
//!     → diagnostic.rs (catch-all handler, JSON snapshot)
//!     → Send to client
//! ```

pub mod diagnostic;
pub mod server;

pub use diagnostic::{is_exposed_var, DiagnosticResponse};
pub use server::{AppState, HttpServer};
