// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Component, Path, PathBuf};
use serde::Deserialize;
use crate::utils::error::{AgendaError, Result};

/// Name of the optional configuration file inside the data directory
pub const CONFIG_FILE_NAME: &str = "agenda.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Settings for one data directory, read from `agenda.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    /// Registered users (JSON array)
    pub users_file: String,
    /// Stored meetings (JSON array)
    pub meetings_file: String,
    /// Logged-in user (JSON object)
    pub session_file: String,
    /// Audit log file name without extension
    pub log_file_basename: String,
    /// Default log level, overridden by RUST_LOG
    pub log_level: String,
    #[serde(skip)]
    pub data_dir: PathBuf,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            users_file: "users.json".to_string(),
            meetings_file: "meetings.json".to_string(),
            session_file: "session.json".to_string(),
            log_file_basename: "agenda".to_string(),
            log_level: "info".to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl AgendaConfig {
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn meetings_path(&self) -> PathBuf {
        self.data_dir.join(&self.meetings_file)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.log", self.log_file_basename))
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load the configuration for a data directory, falling back to defaults
    /// when no `agenda.toml` is present
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<AgendaConfig> {
        let data_dir = data_dir.as_ref();
        let path = data_dir.join(CONFIG_FILE_NAME);

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AgendaError::ConfigError(
                    format!("Failed to read {}: {}", path.display(), e)
                ))?;
            Self::parse(&content)?
        } else {
            AgendaConfig::default()
        };

        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<AgendaConfig> {
        let config: AgendaConfig = toml::from_str(content)
            .map_err(|e| AgendaError::ConfigError(
                format!("Invalid TOML syntax: {}", e)
            ))?;

        Self::validate(&config)?;

        Ok(config)
    }

    fn validate(config: &AgendaConfig) -> Result<()> {
        for (key, value) in [
            ("users_file", &config.users_file),
            ("meetings_file", &config.meetings_file),
            ("session_file", &config.session_file),
            ("log_file_basename", &config.log_file_basename),
        ] {
            Self::validate_file_name(key, value)?;
        }

        let level = config.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AgendaError::ConfigError(
                format!("Unsupported log_level '{}'; expected trace|debug|info|warn|error", config.log_level)
            ));
        }

        Ok(())
    }

    /// File names must stay inside the data directory
    fn validate_file_name(key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AgendaError::ConfigError(
                format!("{} cannot be empty", key)
            ));
        }

        let path = Path::new(value);
        let escapes = path.components().any(|c| matches!(c, Component::ParentDir));
        if path.is_absolute() || escapes {
            return Err(AgendaError::ConfigError(
                format!("{} must be relative to the data directory, got '{}'", key, value)
            ));
        }

        Ok(())
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".agenda")
}
