//! Domain models

pub mod config;
pub mod report;

pub use config::{
    Config, LogFormat, LoggingConfig, RemoteCredentials, RemoteStoreConfig, RotationPolicy,
    ServerConfig, StorageConfig,
};
pub use report::{Report, ReportDate, ReportEntry, ReportSource};
