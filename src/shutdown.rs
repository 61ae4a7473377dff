//! Signal-driven graceful shutdown.
//!
//! The coordinator moves through `Running → ShutdownRequested → Stopped`.
//! It waits for SIGINT/SIGTERM, asks the listener to drain, and gives the
//! drain a bounded grace period before forcing the listener down.

use crate::utils::ServerError;
use async_trait::async_trait;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownState {
    Running,
    ShutdownRequested,
    Stopped,
}

/// The part of a listener the coordinator drives.
#[async_trait(?Send)]
pub trait ServerControl {
    /// Stop accepting connections and resolve once in-flight requests finish.
    async fn drain(&self);

    /// Stop immediately, dropping whatever is still running.
    async fn force_stop(&self);

    /// Requests currently being handled.
    fn in_flight(&self) -> u64 {
        0
    }
}

pub struct ShutdownCoordinator {
    grace: Duration,
    state: watch::Sender<ShutdownState>,
}

impl ShutdownCoordinator {
    pub fn new(grace: Duration) -> Self {
        let (state, _) = watch::channel(ShutdownState::Running);
        Self { grace, state }
    }

    pub fn grace(&self) -> Duration {
        self.grace
    }

    pub fn state(&self) -> ShutdownState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShutdownState> {
        self.state.subscribe()
    }

    /// Waits for `signal`, then drains `server` within the grace period.
    ///
    /// Returns `ShutdownTimeout` when the drain outlives the grace period;
    /// the listener has been force-stopped by then.
    pub async fn run<C, F>(&self, server: &C, signal: F) -> Result<(), ServerError>
    where
        C: ServerControl + ?Sized,
        F: Future<Output = io::Result<()>>,
    {
        signal.await.map_err(ServerError::Signal)?;

        self.state.send_replace(ShutdownState::ShutdownRequested);
        log::info!(
            "🛑 Shutting down server... ({} request(s) in flight, grace period {}s)",
            server.in_flight(),
            self.grace.as_secs_f64()
        );

        let drained = tokio::time::timeout(self.grace, server.drain()).await;

        let outcome = match drained {
            Ok(()) => {
                log::info!("👋 Server exiting");
                Ok(())
            }
            Err(_) => {
                log::error!(
                    "❌ Grace period elapsed with {} request(s) still in flight",
                    server.in_flight()
                );
                server.force_stop().await;
                Err(ServerError::ShutdownTimeout(self.grace))
            }
        };

        self.state.send_replace(ShutdownState::Stopped);
        outcome
    }
}

/// SIGINT/SIGTERM listeners.
///
/// Handlers are registered by `install`, so a signal arriving before
/// `recv` is first polled is queued instead of killing the process.
pub struct ShutdownSignals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignals {
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(windows)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    /// Resolves on the first signal received.
    #[cfg(unix)]
    pub async fn recv(mut self) -> io::Result<()> {
        tokio::select! {
            _ = self.interrupt.recv() => log::info!("📥 Received SIGINT"),
            _ = self.terminate.recv() => log::info!("📥 Received SIGTERM"),
        }
        Ok(())
    }

    #[cfg(windows)]
    pub async fn recv(mut self) -> io::Result<()> {
        self.ctrl_c.recv().await;
        log::info!("📥 Received Ctrl-C");
        Ok(())
    }
}
