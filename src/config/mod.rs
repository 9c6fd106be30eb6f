//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables (`UTC_*`)
//! - CLI arguments (for `utc serve`)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::count::{Limits, MAX_BYTES, MAX_CHARS};
use crate::error::{Result, UtcError};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSection,

    /// Input size limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| UtcError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| UtcError::Config(format!("Failed to parse config: {e}")))
    }

    /// Default config file location (`<config_dir>/utc/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("utc").join("config.toml"))
    }

    /// Load from `path`, else the default path if it exists, else defaults;
    /// then apply environment overrides.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };
        Ok(base.with_env())
    }

    /// Load configuration from environment variables over defaults
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply environment variable overrides
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = var("UTC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("UTC_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("UTC_MAX_CHARS").and_then(|v| v.parse().ok()) {
            self.limits.max_chars = val;
        }
        if let Some(val) = var("UTC_MAX_BYTES").and_then(|v| v.parse().ok()) {
            self.limits.max_bytes = val;
        }
        if let Some(level) = var("UTC_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(json) = var("UTC_LOG_JSON").and_then(|v| parse_bool(&v)) {
            self.logging.json = json;
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// HTTP server section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Enable permissive CORS
    pub cors_enabled: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_size: 2 * 1024 * 1024, // 2 MB, above the text byte cap plus JSON escaping
            cors_enabled: true,
        }
    }
}

impl ServerSection {
    /// Get the full listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Input size limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum characters per request
    pub max_chars: usize,

    /// Maximum UTF-8 bytes per request
    pub max_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            max_bytes: MAX_BYTES,
        }
    }
}

impl From<LimitsConfig> for Limits {
    fn from(config: LimitsConfig) -> Self {
        Limits {
            max_chars: config.max_chars,
            max_bytes: config.max_bytes,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
