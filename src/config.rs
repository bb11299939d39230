//! Configuration System
//!
//! Handles loading configuration for the terminal host from TOML files and
//! environment variables. The component itself never reads configuration;
//! the defaults below are its built-in endpoint and interval.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::directory::{DEFAULT_ENDPOINT, POLL_INTERVAL_MS};
use crate::fetcher::ClientConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_poll_interval() -> u64 {
    POLL_INTERVAL_MS
}

fn default_request_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl SourceConfig {
    /// HTTP client settings for this source
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since this runs before logging is set up;
    /// call [`LoadedConfig::log`] once a subscriber is installed.
    pub fn load_default() -> LoadedConfig {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("docentes").join("config.toml")),
            Some(PathBuf::from("./docentes.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first candidate that exists and is valid, remembering the
    /// ones that exist but failed
    pub fn load_first(candidates: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        path: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push((path.clone(), e)),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            path: None,
            skipped,
        }
    }

    /// Check values a running view cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("source.endpoint is empty".to_string()));
        }
        if self.source.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "source.poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.source.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "source.request_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `DOCENTES_*` overrides from `lookup`. Unparseable numbers are
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("DOCENTES_ENDPOINT") {
            self.source.endpoint = endpoint;
        }
        if let Some(ms) = lookup("DOCENTES_POLL_INTERVAL_MS").and_then(|s| s.parse().ok()) {
            self.source.poll_interval_ms = ms;
        }
        if let Some(ms) = lookup("DOCENTES_REQUEST_TIMEOUT_MS").and_then(|s| s.parse().ok()) {
            self.source.request_timeout_ms = ms;
        }

        if let Some(level) = lookup("DOCENTES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DOCENTES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` when defaults were used
    pub path: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl LoadedConfig {
    /// Report where the config came from
    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Docentes Configuration
#
# Environment variables override these settings:
# - DOCENTES_ENDPOINT
# - DOCENTES_POLL_INTERVAL_MS
# - DOCENTES_REQUEST_TIMEOUT_MS
# - DOCENTES_LOG_LEVEL
# - DOCENTES_LOG_FORMAT

[source]
# Directory endpoint (must return a JSON array)
endpoint = "{endpoint}"

# Time between fetches (ms)
poll_interval_ms = {interval}

# Per-request timeout (ms)
request_timeout_ms = {timeout}

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        endpoint = DEFAULT_ENDPOINT,
        interval = POLL_INTERVAL_MS,
        timeout = default_request_timeout(),
    )
}
