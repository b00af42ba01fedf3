//! Graceful-shutdown trigger for the binary.
//!
//! Resolves on Ctrl-C or, on unix, SIGTERM. A handler that cannot be
//! installed never fires, so the other one still gets to stop the server.

use std::future::{pending, Future};
use std::io;

use tracing::{error, info};

/// Which signal stopped the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

/// Waits for Ctrl-C or SIGTERM.
pub async fn signal() {
    first_signal(tokio::signal::ctrl_c(), terminate()).await;
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    pending().await
}

/// Resolves with whichever source fires first. A source that fails is
/// logged and then treated as never firing.
pub async fn first_signal<I, T>(interrupt: I, terminate: T) -> ShutdownSignal
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    let interrupt = or_pending(interrupt, "Ctrl-C");
    let terminate = or_pending(terminate, "SIGTERM");

    let received = tokio::select! {
        () = interrupt => ShutdownSignal::Interrupt,
        () = terminate => ShutdownSignal::Terminate,
    };
    info!(signal = ?received, "shutdown signal received");
    received
}

async fn or_pending<F>(source: F, name: &'static str)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = source.await {
        error!(%err, signal = name, "unable to install signal handler");
        pending::<()>().await;
    }
}
