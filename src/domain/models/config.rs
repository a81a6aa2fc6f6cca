use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure for the report server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Local report directory
    #[serde(default)]
    pub storage: StorageConfig,

    /// Optional remote report store
    #[serde(default)]
    pub remote: RemoteStoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to allow cross-origin requests
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

/// Local report directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Directory holding one `{date}.html` file per report
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
        }
    }
}

/// Remote (Supabase) report store configuration
///
/// Remote mode is enabled only when both `url` and `key` are non-empty.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RemoteStoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`
    #[serde(default)]
    pub url: Option<String>,

    /// Service or anon API key
    #[serde(default)]
    pub key: Option<String>,

    /// Table holding `run_date` / `report_html` rows
    #[serde(default = "default_table")]
    pub table: String,

    /// Request timeout; unset means the client never gives up on its own
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_table() -> String {
    "analysis_runs".to_string()
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            table: default_table(),
            timeout_secs: None,
        }
    }
}

/// Complete credentials for the remote store.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteCredentials {
    pub url: String,
    pub key: String,
}

impl RemoteStoreConfig {
    /// Both credentials, if both are present and non-empty.
    pub fn credentials(&self) -> Option<RemoteCredentials> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self.key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(RemoteCredentials {
            url: url.to_string(),
            key: key.to_string(),
        })
    }

    /// Exactly one of url/key is set.
    pub fn is_partial(&self) -> bool {
        let has_url = self.url.as_deref().is_some_and(|s| !s.trim().is_empty());
        let has_key = self.key.as_deref().is_some_and(|s| !s.trim().is_empty());
        has_url != has_key
    }
}

impl fmt::Debug for RemoteStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStoreConfig")
            .field("url", &self.url)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("table", &self.table)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl fmt::Debug for RemoteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("url", &self.url)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stdout)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_parts() {
        let mut remote = RemoteStoreConfig::default();
        assert!(remote.credentials().is_none());
        assert!(!remote.is_partial());

        remote.url = Some("https://abc.supabase.co".to_string());
        assert!(remote.credentials().is_none());
        assert!(remote.is_partial());

        remote.key = Some("   ".to_string());
        assert!(remote.credentials().is_none());
        assert!(remote.is_partial());

        remote.key = Some("service-key".to_string());
        let creds = remote.credentials().unwrap();
        assert_eq!(creds.url, "https://abc.supabase.co");
        assert_eq!(creds.key, "service-key");
        assert!(!remote.is_partial());
    }

    #[test]
    fn test_debug_redacts_key() {
        let remote = RemoteStoreConfig {
            url: Some("https://abc.supabase.co".to_string()),
            key: Some("super-secret-service-key".to_string()),
            ..Default::default()
        };
        let rendered = format!("{remote:?}");
        assert!(!rendered.contains("super-secret-service-key"));
        assert!(rendered.contains("[REDACTED]"));

        let creds = format!("{:?}", remote.credentials().unwrap());
        assert!(!creds.contains("super-secret-service-key"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.reports_dir, PathBuf::from("reports"));
        assert_eq!(config.remote.table, "analysis_runs");
        assert_eq!(config.remote.timeout_secs, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
