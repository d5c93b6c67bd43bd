/// Termination signal handling
///
/// SIGINT and SIGTERM are treated identically: the first one to arrive
/// cancels a shared [`CancellationToken`]. The heartbeat loop watches that
/// token and exits promptly, even in the middle of its sleep.
///
/// Both signal listeners are registered before
/// [`install_shutdown_handler`] returns, so a signal delivered while the
/// banner is being printed is not lost.
///
/// # Example
///
/// ```no_run
/// use worker_service::shutdown::install_shutdown_handler;
///
/// # async fn example() -> worker_service::Result<()> {
/// let shutdown = install_shutdown_handler()?;
/// shutdown.cancelled().await;
/// # Ok(())
/// # }
/// ```
use crate::error::{Result, WorkerError};
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio_util::sync::CancellationToken;

/// Installs SIGTERM and SIGINT listeners
///
/// Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns [`WorkerError::SignalHandler`] if either listener cannot be registered.
pub fn install_shutdown_handler() -> Result<CancellationToken> {
    let sigterm = register("SIGTERM", SignalKind::terminate())?;
    let sigint = register("SIGINT", SignalKind::interrupt())?;

    let token = CancellationToken::new();
    tokio::spawn(wait_for_signal(sigterm, sigint, token.clone()));

    Ok(token)
}

fn register(name: &'static str, kind: SignalKind) -> Result<Signal> {
    signal(kind).map_err(|source| WorkerError::SignalHandler {
        signal: name,
        source,
    })
}

async fn wait_for_signal(mut sigterm: Signal, mut sigint: Signal, token: CancellationToken) {
    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!(signal = "SIGTERM", "Termination signal received");
        }
        _ = sigint.recv() => {
            tracing::info!(signal = "SIGINT", "Termination signal received");
        }
        // Someone else already asked us to stop; nothing left to listen for.
        _ = token.cancelled() => return,
    }

    token.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_install_returns_live_token() {
        let token = install_shutdown_handler().unwrap();
        assert!(!token.is_cancelled());

        // Listener task exits cleanly once the token is cancelled elsewhere
        token.cancel();
        assert!(token.is_cancelled());
    }

    // Delivery of real SIGINT/SIGTERM is exercised against the built binary
    // in tests/worker_process_tests.rs, where it can't take down the test harness.
}
