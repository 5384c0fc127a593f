use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// What the navigator does after a successful execute
///
/// The window is hidden on success under either policy; this only decides
/// whether the panes keep their last state for a repeat action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AfterExecute {
    /// Leave panes, selections and filters as they were
    #[default]
    Keep,
    /// Return every pane to the catalog root with empty filters
    Reset,
}

impl AfterExecute {
    pub const VALUES: &[AfterExecute] = &[AfterExecute::Keep, AfterExecute::Reset];

    pub fn as_str(&self) -> &'static str {
        match self {
            AfterExecute::Keep => "keep",
            AfterExecute::Reset => "reset",
        }
    }
}

impl std::fmt::Display for AfterExecute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AfterExecute {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(AfterExecute::Keep),
            "reset" => Ok(AfterExecute::Reset),
            _ => Err(crate::Error::Config(ConfigError::InvalidAfterExecute(s.to_string()).to_string())),
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to a static catalog TOML file (absolute)
    pub path: PathBuf,
}

/// Query cache tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Entries younger than this are not refreshed when their key becomes current again
    #[serde(default)]
    pub stale_after_ms: u64,
}

impl CacheConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_millis(self.stale_after_ms)
    }
}

/// Navigator behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub after_execute: AfterExecute,
}

/// File sink for logs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Log directory (defaults to `~/.tripane/logs`)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: FileLoggingConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingConfig::default() }
    }
}

/// Root configuration structure for tripane.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub navigator: NavigatorConfig,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| crate::Error::Config(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        use crate::Error;

        if !self.catalog.path.is_absolute() {
            return Err(Error::Config(ConfigError::AbsolutePathRequired("catalog.path".to_string()).to_string()));
        }

        if let Some(dir) = &self.logging.file.directory
            && !dir.is_absolute()
        {
            return Err(Error::Config(
                ConfigError::AbsolutePathRequired("logging.file.directory".to_string()).to_string(),
            ));
        }

        if crate::logging::LogFormat::parse_str(&self.logging.format).is_none() {
            return Err(Error::Config(ConfigError::InvalidLogFormat(self.logging.format.clone()).to_string()));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Tripane Configuration Example

[catalog]
# Static catalog file (must be absolute path)
path = "/path/to/catalog.toml"

[cache]
# Serve cached lists without refreshing while younger than this (0 = always refresh)
stale_after_ms = 0

[navigator]
# After a successful execute: "keep" the last state, or "reset" to the catalog root
after_execute = "keep"

[logging]
level = "warn"
# pretty, json or compact
format = "compact"

[logging.file]
enabled = false
# directory = "/home/me/.tripane/logs"
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid after-execute policy
    #[error("invalid after_execute policy: {0}")]
    InvalidAfterExecute(String),

    /// Invalid log format
    #[error("invalid log format: {0}")]
    InvalidLogFormat(String),

    /// Absolute path required
    #[error("absolute path required: {0}")]
    AbsolutePathRequired(String),
}
