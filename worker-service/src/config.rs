/// Configuration for the worker service
///
/// Configuration comes from the environment only. There are no config files
/// and no command line flags.
///
/// # Environment Variables
///
/// - `DB_HOST`: Database host shown in the startup banner (default: `not set`)
/// - `RUST_LOG`: Log filter for diagnostics on stderr (default: `worker_service=info`)
///
/// # Example
///
/// ```no_run
/// use worker_service::config::WorkerConfig;
///
/// let config = WorkerConfig::from_env();
/// println!("Database host: {}", config.db_host);
/// ```
use std::env;
use std::time::Duration;

/// Environment variable holding the database host
pub const DB_HOST_ENV: &str = "DB_HOST";

/// Value reported when `DB_HOST` is absent
pub const DB_HOST_FALLBACK: &str = "not set";

/// Interval between heartbeat lines (30 seconds)
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Worker configuration
///
/// Read once at startup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Database host, or `not set`
    pub db_host: String,

    /// Delay between heartbeat lines
    pub heartbeat_interval: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            db_host: DB_HOST_FALLBACK.to_string(),
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
        }
    }
}

impl WorkerConfig {
    /// Creates a configuration with the given database host and the default interval
    pub fn new(db_host: impl Into<String>) -> Self {
        WorkerConfig {
            db_host: db_host.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from environment variables
    ///
    /// A missing (or non-unicode) `DB_HOST` falls back to `not set`. A set but
    /// empty value is kept as is.
    pub fn from_env() -> Self {
        Self::new(db_host_from(env::var(DB_HOST_ENV).ok()))
    }

    /// Overrides the heartbeat interval
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval = interval;
        self
    }
}

fn db_host_from(value: Option<String>) -> String {
    value.unwrap_or_else(|| DB_HOST_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkerConfig::default();
        assert_eq!(config.db_host, "not set");
        assert_eq!(config.heartbeat_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_db_host_fallback() {
        assert_eq!(db_host_from(None), "not set");
    }

    #[test]
    fn test_db_host_present() {
        assert_eq!(db_host_from(Some("example.db".to_string())), "example.db");
    }

    #[test]
    fn test_db_host_empty_is_kept() {
        assert_eq!(db_host_from(Some(String::new())), "");
    }

    #[test]
    fn test_with_heartbeat_interval() {
        let config = WorkerConfig::new("db.internal")
            .with_heartbeat_interval(Duration::from_millis(50));
        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.heartbeat_interval, Duration::from_millis(50));
    }

    // from_env() against the real process environment is covered by
    // tests/worker_process_tests.rs, which sets DB_HOST on a child process.
}
