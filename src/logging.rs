//! Diagnostic logging.
//!
//! Events go to stderr so stdout stays clean for reports (JSON output is
//! commonly piped). The level comes from `-v`/`-q` unless `ARTLINT_LOG`
//! holds an `EnvFilter` directive, which always wins.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a filter directive such as `artlint=debug`.
pub const LOG_ENV: &str = "ARTLINT_LOG";

/// Log level for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Default: configuration fallbacks and problems only
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Level for the `-q` flag and the `-v` count.
    ///
    /// Quiet wins over any verbosity. 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub fn from_flags(quiet: bool, verbosity: u8) -> Self {
        if quiet {
            return LogLevel::Error;
        }
        match verbosity {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Configuration for the log subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Include the module path of each event
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Configuration for the CLI flags. Debug and trace add module targets.
    pub fn from_flags(quiet: bool, verbosity: u8) -> Self {
        let level = LogLevel::from_flags(quiet, verbosity);
        Self::default()
            .with_level(level)
            .with_target(matches!(level, LogLevel::Debug | LogLevel::Trace))
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Install the global subscriber.
///
/// Calling it again is a no-op: the first subscriber stays installed.
///
/// # Examples
///
/// ```no_run
/// use artlint::logging::{init_logging, LogLevel, LoggingConfig};
///
/// init_logging(LoggingConfig::new().with_level(LogLevel::Debug));
/// ```
pub fn init_logging(config: LoggingConfig) {
    let result = fmt::Subscriber::builder()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("Log subscriber already installed");
    }
}
