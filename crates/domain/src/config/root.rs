use serde::{Deserialize, Serialize};

use super::collector::CollectorConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeConfig;

/// Main configuration structure for keywatch
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// What to query, where, and how long to wait
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Collection pass scheduling
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub interval_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. keywatch.toml in current directory
    /// 3. /etc/keywatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("keywatch.toml").exists() {
            Self::from_file("keywatch.toml")?
        } else if std::path::Path::new("/etc/keywatch/config.toml").exists() {
            Self::from_file("/etc/keywatch/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interval) = overrides.interval_secs {
            self.collector.interval_secs = interval;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.probe.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }
}
