//! Startup wiring
//!
//! Builds the report resolver from loaded configuration. The remote store
//! is constructed only when complete credentials are present; otherwise the
//! service runs local-only.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::Config;
use crate::domain::ports::{LocalReportStore, RemoteReportStore};
use crate::infrastructure::storage::FileReportStore;
use crate::infrastructure::supabase::{SupabaseConfig, SupabaseReportStore};
use crate::services::ReportResolver;

/// Build the resolver described by `config`.
pub fn build_resolver(config: &Config) -> Result<ReportResolver> {
    let reports_dir = &config.storage.reports_dir;
    let reports_dir = std::path::absolute(reports_dir).unwrap_or_else(|_| reports_dir.clone());
    let local: Arc<dyn LocalReportStore> = Arc::new(FileReportStore::new(&reports_dir));

    let remote = build_remote_store(config)?;

    info!(
        reports_dir = %reports_dir.display(),
        remote_enabled = remote.is_some(),
        "report resolver initialized"
    );

    Ok(ReportResolver::new(local, remote))
}

fn build_remote_store(config: &Config) -> Result<Option<Arc<dyn RemoteReportStore>>> {
    let Some(supabase_config) = SupabaseConfig::from_remote(&config.remote) else {
        if config.remote.is_partial() {
            warn!("only one of the remote URL and key is set; running local-only");
        }
        return Ok(None);
    };

    let store = SupabaseReportStore::new(supabase_config)
        .context("Failed to create Supabase client")?;
    Ok(Some(Arc::new(store)))
}
