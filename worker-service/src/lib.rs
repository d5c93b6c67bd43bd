//! # Worker Service Library
//!
//! Placeholder background worker: prints a startup banner, then a heartbeat
//! line every 30 seconds until SIGINT or SIGTERM asks it to stop.
//!
//! ## Modules
//!
//! - `config`: Environment configuration (`DB_HOST`)
//! - `heartbeat`: Banner and heartbeat loop
//! - `shutdown`: SIGINT/SIGTERM handling
//! - `error`: Error types
//!
//! ## Example
//!
//! ```no_run
//! use worker_service::{HeartbeatWorker, WorkerConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let shutdown = CancellationToken::new();
//! let mut worker = HeartbeatWorker::new(WorkerConfig::from_env(), std::io::stdout());
//! worker.print_banner();
//! worker.run(shutdown).await;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod heartbeat;
pub mod shutdown;

pub use config::WorkerConfig;
pub use error::{Result, WorkerError};
pub use heartbeat::HeartbeatWorker;
