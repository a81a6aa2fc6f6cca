use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "competeiq.yaml";

/// Variables the report server has always honoured without a prefix.
const LEGACY_ENV_KEYS: [(&str, &str); 4] = [
    ("PORT", "server.port"),
    ("REPORTS_DIR", "storage.reports_dir"),
    ("SUPABASE_URL", "remote.url"),
    ("SUPABASE_KEY", "remote.key"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Reports directory cannot be empty")]
    EmptyReportsDir,

    #[error("Remote table name cannot be empty")]
    EmptyRemoteTable,

    #[error("Invalid remote URL: {0}. Must start with http:// or https://")]
    InvalidRemoteUrl(String),

    #[error("Invalid remote timeout: 0. Omit timeout_secs to disable the timeout")]
    InvalidRemoteTimeout,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Config file not found: {0}")]
    MissingConfigFile(PathBuf),
}

/// Highest-precedence settings, usually from command-line flags.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "ServerOverrides::is_empty")]
    pub server: ServerOverrides,
    #[serde(skip_serializing_if = "StorageOverrides::is_empty")]
    pub storage: StorageOverrides,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ServerOverrides {
    const fn is_empty(&self) -> bool {
        self.host.is_none() && self.port.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<PathBuf>,
}

impl StorageOverrides {
    const fn is_empty(&self) -> bool {
        self.reports_dir.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LoggingOverrides {
    const fn is_empty(&self) -> bool {
        self.level.is_none()
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default file and the environment
    pub fn load() -> Result<Config> {
        Self::load_with(None, &ConfigOverrides::default())
    }

    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `config_file`, or `competeiq.yaml` if present
    /// 3. Environment variables (COMPETEIQ_* prefix, `__` nests)
    /// 4. Legacy variables (PORT, REPORTS_DIR, SUPABASE_URL, SUPABASE_KEY)
    /// 5. `overrides`
    pub fn load_with(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(ConfigError::MissingConfigFile(path.to_path_buf()).into());
            }
        }

        let config: Config = Self::figment(config_file, overrides)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, ignoring the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let file = config_file.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed("COMPETEIQ_").split("__"))
            .merge(legacy_env())
            .merge(Serialized::defaults(overrides))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if config.storage.reports_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyReportsDir);
        }

        if config.remote.table.trim().is_empty() {
            return Err(ConfigError::EmptyRemoteTable);
        }

        if let Some(url) = config.remote.url.as_deref().map(str::trim) {
            if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidRemoteUrl(url.to_string()));
            }
        }

        if config.remote.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidRemoteTimeout);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

fn legacy_env() -> Env {
    let names: Vec<&str> = LEGACY_ENV_KEYS.iter().map(|(name, _)| *name).collect();
    Env::raw().only(&names).map(|key| {
        let mapped = LEGACY_ENV_KEYS
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map_or_else(|| key.as_str().to_string(), |(_, path)| (*path).to_string());
        mapped.into()
    })
}
