//! # Worker Service
//!
//! Placeholder worker process. It reports its database host, then prints a
//! heartbeat every 30 seconds until it receives SIGINT or SIGTERM, at which
//! point it exits with status 0.
//!
//! Status lines go to stdout; diagnostics go to stderr and are filtered by
//! `RUST_LOG`.
//!
//! ## Usage
//!
//! ```bash
//! DB_HOST=db.internal cargo run -p worker-service
//! ```

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worker_service::shutdown::install_shutdown_handler;
use worker_service::{HeartbeatWorker, WorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so stdout only carries status lines)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worker_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Worker Service v{} starting...", env!("CARGO_PKG_VERSION"));

    // Handlers go in before anything is printed so no signal is missed
    let shutdown = install_shutdown_handler().context("Failed to install signal handlers")?;

    let config = WorkerConfig::from_env();
    let mut worker = HeartbeatWorker::new(config, std::io::stdout());

    worker.print_banner();
    let beats = worker.run(shutdown).await;

    tracing::info!(beats, "Worker stopped");

    Ok(())
}
