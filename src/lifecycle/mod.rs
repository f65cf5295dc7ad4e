//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Merge env file → Resolve config → (caller binds listener)
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Stop accepting → Drain connections → Exit 0
//! ```
//!
//! # Design Decisions
//! - Ordered startup: environment first, then config, then listener
//! - Drain has no deadline: in-flight requests always finish

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::{spawn_signal_listener, TerminationSignals};
pub use startup::{prepare, Startup};
