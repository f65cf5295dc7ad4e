//! OS signal handling.
//!
//! SIGTERM and SIGINT (Ctrl+C) both request a graceful shutdown.
//!
//! Handlers are registered synchronously by `TerminationSignals::install`,
//! which must run before the listener binds. Until a handler is registered
//! the OS default action applies and a signal kills the process outright.

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Registered termination signal streams.
#[cfg(unix)]
pub struct TerminationSignals {
    sigterm: tokio::signal::unix::Signal,
    sigint: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    /// Register SIGTERM and SIGINT handlers. Must be called inside a Tokio runtime.
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            sigterm: signal(SignalKind::terminate())?,
            sigint: signal(SignalKind::interrupt())?,
        })
    }

    /// Wait for the next termination signal and return its name.
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.sigterm.recv() => "SIGTERM",
            _ = self.sigint.recv() => "SIGINT",
        }
    }
}

/// Registered termination signal streams.
#[cfg(not(unix))]
pub struct TerminationSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(not(unix))]
impl TerminationSignals {
    /// Register the Ctrl+C handler. Must be called inside a Tokio runtime.
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    /// Wait for the next termination signal and return its name.
    pub async fn recv(&mut self) -> &'static str {
        self.ctrl_c.recv().await;
        "SIGINT"
    }
}

/// Register signal handlers now and trigger `shutdown` once one fires.
pub fn spawn_signal_listener(shutdown: Shutdown) -> std::io::Result<JoinHandle<()>> {
    let mut signals = TerminationSignals::install()?;

    Ok(tokio::spawn(async move {
        let signal = signals.recv().await;
        tracing::info!(signal, "Signal received: closing HTTP server");
        shutdown.trigger();
    }))
}
