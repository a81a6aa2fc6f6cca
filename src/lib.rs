//! CompeteIQ Reports - date-keyed report server
//!
//! Serves pre-generated HTML competitive intelligence reports. Reports are
//! looked up in a local directory first and, when credentials are
//! configured, in a remote Supabase table; remote hits are cached locally.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): report model, errors, and storage ports
//! - **Service Layer** (`services`): the report resolver
//! - **Infrastructure Layer** (`infrastructure`): file store, Supabase
//!   client, configuration, logging, startup wiring
//! - **Adapters** (`adapters`): the HTTP surface
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use competeiq_reports::infrastructure::storage::FileReportStore;
//! use competeiq_reports::ReportResolver;
//!
//! # async fn run() -> Result<(), competeiq_reports::ReportError> {
//! let resolver = ReportResolver::local_only(Arc::new(FileReportStore::new("reports")));
//! let latest = resolver.resolve_latest().await?;
//! let report = resolver.resolve_by_date(latest.as_str()).await?;
//! println!("{} bytes from {}", report.body.len(), report.source);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::{ReportsHttpConfig, ReportsHttpServer};
pub use domain::models::{Config, Report, ReportDate, ReportEntry, ReportSource};
pub use domain::ports::{LocalReportStore, RemoteReportStore};
pub use domain::{ReportError, StoreError, StoreResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ReportResolver;
