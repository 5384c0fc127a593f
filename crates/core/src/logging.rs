//! Logging bootstrap built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `TRIPANE_LOG`: Filter directive (like `RUST_LOG`), e.g., `tripane_ui=debug`
//! - `TRIPANE_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `TRIPANE_LOG_DIR`: Override the log directory used by the file sink
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "compact"
//!
//! [logging.file]
//! enabled = true
//! ```
//!
//! While the TUI owns the terminal, stderr output would corrupt the screen, so
//! [`init_logging`] takes an `interactive` flag that drops the stderr layer and
//! keeps only the file sink.
//!
//! ```no_run
//! use tripane_core::logging::{self, LoggingConfig};
//!
//! let _guard = logging::init_logging(LoggingConfig::default(), false)?;
//! # Ok::<(), tripane_core::Error>(())
//! ```

use crate::Error;
use crate::config::LoggingSection;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    #[default]
    Compact,
}

impl LogFormat {
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when no env override is present
    pub level: String,
    /// Output format for stderr
    pub format: LogFormat,
    /// Directory for the rolling file sink, if enabled
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::default(), file_dir: None }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_file_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file_dir = Some(dir.into());
        self
    }

    /// Resolve a `[logging]` section, applying the default directory when the file sink is enabled.
    pub fn from_section(section: &LoggingSection) -> Result<Self, Error> {
        let format = LogFormat::parse_str(&section.format).unwrap_or_default();
        let file_dir = match (section.file.enabled, &section.file.directory) {
            (false, _) => None,
            (true, Some(dir)) => Some(dir.clone()),
            (true, None) => Some(Self::default_log_dir()?),
        };

        Ok(Self { level: section.level.clone(), format, file_dir })
    }

    fn build_env_filter(&self) -> EnvFilter {
        let filter = env::var("TRIPANE_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone());

        EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    fn is_tty() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("TRIPANE_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        if self.format == LogFormat::Pretty && !Self::is_tty() { LogFormat::Compact } else { self.format }
    }

    fn default_log_dir() -> Result<PathBuf, Error> {
        if let Ok(custom_dir) = env::var("TRIPANE_LOG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;

        Ok(PathBuf::from(home).join(".tripane").join("logs"))
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn stderr_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Pretty => fmt::layer().pretty().with_writer(io::stderr).with_ansi(true).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).boxed(),
    }
}

/// Initialize the global tracing subscriber.
///
/// With `interactive` set, nothing is written to stderr. The returned guard
/// must be held until exit so the file sink flushes.
pub fn init_logging(config: LoggingConfig, interactive: bool) -> Result<Option<WorkerGuard>, Error> {
    let env_filter = config.build_env_filter();
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if !interactive {
        layers.push(stderr_layer(config.detect_format()));
    }

    let guard = match &config.file_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .map_err(|e| Error::Config(format!("Failed to create log directory: {}", e)))?;

            let file_appender = tracing_appender::rolling::daily(log_dir, "tripane.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(fmt::layer().json().with_writer(non_blocking).boxed());
            Some(guard)
        }
        None => None,
    };

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(level = %config.level, file_sink = config.file_dir.is_some(), interactive, "logging initialized");
    Ok(guard)
}

/// Sanitize file paths for logging (replace the home directory with `~`).
pub fn sanitize_path(path: &Path) -> String {
    if let Ok(home) = env::var("HOME")
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileLoggingConfig;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!(LogFormat::parse_str("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse_str("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse_str("Compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse_str("invalid"), None);
    }

    #[test]
    fn test_log_format_as_str() {
        for format in LogFormat::VALUES {
            assert_eq!(LogFormat::parse_str(format.as_str()), Some(*format));
        }
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file_dir.is_none());
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::new()
            .with_level("debug")
            .with_format(LogFormat::Json)
            .with_file_dir("/tmp/tripane");

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_dir, Some(PathBuf::from("/tmp/tripane")));
    }

    #[test]
    fn test_from_section_file_disabled() {
        let section = LoggingSection::default();
        let config = LoggingConfig::from_section(&section).unwrap();
        assert!(config.file_dir.is_none());
    }

    #[test]
    fn test_from_section_explicit_directory() {
        let section = LoggingSection {
            level: "info".to_string(),
            format: "json".to_string(),
            file: FileLoggingConfig { enabled: true, directory: Some(PathBuf::from("/var/log/tripane")) },
        };

        let config = LoggingConfig::from_section(&section).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_dir, Some(PathBuf::from("/var/log/tripane")));
    }

    #[test]
    fn test_sanitize_path() {
        let home = env::var("HOME").unwrap_or_default();
        if !home.is_empty() {
            let test_path = PathBuf::from(&home).join("test").join("file.txt");
            assert_eq!(sanitize_path(&test_path), "~/test/file.txt");
        }

        let abs_path = PathBuf::from("/var/log/test.log");
        assert_eq!(sanitize_path(&abs_path), "/var/log/test.log");
    }
}
