/// Heartbeat worker
///
/// Prints the startup banner and then a status line once per interval until
/// shutdown is requested.
///
/// # Lifecycle
///
/// ```text
///   start ──> banner ──> RUNNING ──(SIGINT | SIGTERM)──> TERMINATED
///                          │  ▲
///                          └──┘  "Worker is running..." every interval
/// ```
///
/// # Output
///
/// Every line is flushed as soon as it is written:
///
/// - `Worker service started`
/// - `Database host: <host>`
/// - `Worker is running...` (repeated)
/// - `Shutting down gracefully...` (once, on shutdown)
///
/// # Example
///
/// ```no_run
/// use worker_service::config::WorkerConfig;
/// use worker_service::heartbeat::HeartbeatWorker;
/// use worker_service::shutdown::install_shutdown_handler;
///
/// # async fn example() -> worker_service::Result<()> {
/// let shutdown = install_shutdown_handler()?;
/// let mut worker = HeartbeatWorker::new(WorkerConfig::from_env(), std::io::stdout());
///
/// worker.print_banner();
/// worker.run(shutdown).await;
/// # Ok(())
/// # }
/// ```
use crate::config::WorkerConfig;
use std::io::Write;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// First banner line
pub const STARTED_LINE: &str = "Worker service started";

/// Status line emitted once per interval
pub const HEARTBEAT_LINE: &str = "Worker is running...";

/// Final line emitted on shutdown
pub const SHUTDOWN_LINE: &str = "Shutting down gracefully...";

/// Heartbeat worker
///
/// Generic over its output so tests can capture what production writes to stdout.
pub struct HeartbeatWorker<W: Write> {
    /// Configuration (read-only after startup)
    config: WorkerConfig,

    /// Where status lines go
    out: W,
}

impl<W: Write> HeartbeatWorker<W> {
    /// Creates a new heartbeat worker
    ///
    /// # Arguments
    ///
    /// * `config` - Worker configuration
    /// * `out` - Destination for status lines (stdout in production)
    pub fn new(config: WorkerConfig, out: W) -> Self {
        HeartbeatWorker { config, out }
    }

    /// Gets the worker configuration
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Writes the two startup lines
    pub fn print_banner(&mut self) {
        tracing::info!(
            db_host = %self.config.db_host,
            interval_secs = self.config.heartbeat_interval.as_secs_f64(),
            "Worker starting"
        );

        self.emit(STARTED_LINE);
        let host_line = format!("Database host: {}", self.config.db_host);
        self.emit(&host_line);
    }

    /// Runs the heartbeat loop until `shutdown` is cancelled
    ///
    /// A heartbeat is written immediately and then once per interval. The
    /// sleep between heartbeats is abandoned as soon as the token fires, after
    /// which the shutdown line is written.
    ///
    /// # Returns
    ///
    /// Number of heartbeats written
    pub async fn run(&mut self, shutdown: CancellationToken) -> u64 {
        let interval = self.config.heartbeat_interval;
        let mut beats: u64 = 0;

        while !shutdown.is_cancelled() {
            self.emit(HEARTBEAT_LINE);
            beats += 1;
            tracing::debug!(beats, "Heartbeat");

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = sleep(interval) => {}
            }
        }

        tracing::info!(beats, "Shutdown requested, stopping heartbeat loop");
        self.emit(SHUTDOWN_LINE);

        beats
    }

    /// Consumes the worker and returns its output
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Writes and flushes a single line
    ///
    /// A failed write (e.g. stdout closed by the reader) is logged and
    /// otherwise ignored; only a termination signal ends the worker.
    fn emit(&mut self, line: &str) {
        let result = writeln!(self.out, "{}", line).and_then(|_| self.out.flush());

        if let Err(e) = result {
            tracing::warn!(error = %e, line, "Failed to write status line");
        }
    }
}
