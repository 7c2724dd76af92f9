//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `quickactions.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to print and how.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `all`, `defaults`, `enabled`, or a category name.
    pub selection: String,
    /// Pretty-print the JSON.
    pub pretty: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `quickactions.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("quickactions.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("QUICKACTIONS_SELECTION") {
            self.output.selection = val;
        }
        if let Ok(val) = std::env::var("QUICKACTIONS_PRETTY") {
            self.set_pretty(&val)?;
        }
        if let Ok(val) = std::env::var("QUICKACTIONS_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn set_pretty(&mut self, val: &str) -> Result<(), ConfigError> {
        self.output.pretty = val.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "QUICKACTIONS_PRETTY must be true or false, got {val:?}"
            ))
        })?;
        Ok(())
    }

    /// Check semantic constraints that TOML parsing cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the selection is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.selection.trim().is_empty() {
            return Err(ConfigError::Validation(
                "selection must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            selection: "defaults".to_string(),
            pretty: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "quickactions=info,quickaction_catalog=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
