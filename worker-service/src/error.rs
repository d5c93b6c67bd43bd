/// Error types for the worker service
///
/// The heartbeat loop itself has no failure paths; the only fallible step
/// is wiring up the process signal handlers at startup.
use thiserror::Error;

/// Worker errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Registering a SIGINT/SIGTERM listener failed
    #[error("Failed to install {signal} handler: {source}")]
    SignalHandler {
        /// Signal name (e.g. "SIGTERM")
        signal: &'static str,

        #[source]
        source: std::io::Error,
    },
}

/// Result alias for worker operations
pub type Result<T> = std::result::Result<T, WorkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_handler_display() {
        let err = WorkerError::SignalHandler {
            signal: "SIGTERM",
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.to_string(), "Failed to install SIGTERM handler: boom");
    }
}
