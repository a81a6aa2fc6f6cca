//! Report resolution across the local cache and the remote store.
//!
//! Lookups consult the local store first and fall back to the remote store.
//! Remote hits fetched by date are written through to the local store.
//! A local file that exists always wins over the remote copy.
//! Store failures never reach the caller: [`absorb`] turns every
//! [`StoreError`] into an empty answer so the resolver degrades to whatever
//! source is still reachable.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::{ReportError, StoreError, StoreResult};
use crate::domain::models::{Report, ReportDate, ReportEntry, ReportSource};
use crate::domain::ports::{LocalReportStore, RemoteReportStore};

/// Resolves "latest", "by date", and "list" queries.
///
/// Holds no mutable state; the remote store is optional and its absence
/// means local-only mode.
#[derive(Clone)]
pub struct ReportResolver {
    local: Arc<dyn LocalReportStore>,
    remote: Option<Arc<dyn RemoteReportStore>>,
}

impl ReportResolver {
    pub fn new(
        local: Arc<dyn LocalReportStore>,
        remote: Option<Arc<dyn RemoteReportStore>>,
    ) -> Self {
        Self { local, remote }
    }

    /// Resolver with no remote store.
    pub fn local_only(local: Arc<dyn LocalReportStore>) -> Self {
        Self::new(local, None)
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub fn local_location(&self) -> String {
        self.local.location()
    }

    /// Date of the most recent report.
    ///
    /// Any local report wins over the remote store, even an older one.
    #[instrument(skip(self))]
    pub async fn resolve_latest(&self) -> Result<ReportDate, ReportError> {
        let local = absorb(
            ReportSource::Local,
            "list_dates",
            self.local.list_dates().await,
        );
        if let Some(latest) = local.into_iter().max() {
            debug!(date = %latest, "latest report resolved locally");
            return Ok(latest);
        }

        if let Some(remote) = &self.remote {
            let latest = absorb(ReportSource::Remote, "latest_date", remote.latest_date().await);
            if let Some(latest) = latest {
                debug!(date = %latest, "latest report resolved remotely");
                return Ok(latest);
            }
        }

        Err(ReportError::NoReports)
    }

    /// Report body for a raw date key.
    ///
    /// The key is validated before any store is touched. A remote hit is
    /// cached locally; a failed cache write is logged and otherwise ignored.
    /// A local entry that exists but cannot be read is reported as not found
    /// without consulting the remote store, so it is never overwritten.
    #[instrument(skip(self))]
    pub async fn resolve_by_date(&self, raw_date: &str) -> Result<Report, ReportError> {
        let date = ReportDate::parse(raw_date)?;

        match self.local.read(&date).await {
            Ok(Some(body)) => {
                return Ok(Report {
                    date,
                    body,
                    source: ReportSource::Local,
                });
            }
            Ok(None) => {}
            Err(err) => {
                log_absorbed(ReportSource::Local, "read", &err);
                return Err(ReportError::NotFound(date));
            }
        }

        let Some(remote) = &self.remote else {
            return Err(ReportError::NotFound(date));
        };

        let Some(body) = absorb(ReportSource::Remote, "fetch", remote.fetch(&date).await) else {
            return Err(ReportError::NotFound(date));
        };

        match self.local.write(&date, body.as_bytes()).await {
            Ok(()) => info!(date = %date, "cached remote report locally"),
            Err(err) => warn!(date = %date, error = %err, "failed to cache remote report"),
        }

        Ok(Report {
            date,
            body: body.into_bytes(),
            source: ReportSource::Remote,
        })
    }

    /// Every known report, newest first, one entry per date.
    ///
    /// A date present in both stores is listed once, as local.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Vec<ReportEntry> {
        let local = absorb(
            ReportSource::Local,
            "list_dates",
            self.local.list_dates().await,
        );

        let mut seen: HashSet<ReportDate> = local.iter().cloned().collect();
        let mut entries: Vec<ReportEntry> = local
            .into_iter()
            .map(|date| ReportEntry::new(date, ReportSource::Local))
            .collect();

        if let Some(remote) = &self.remote {
            let remote_dates = absorb(ReportSource::Remote, "list_dates", remote.list_dates().await);
            for date in remote_dates {
                if seen.insert(date.clone()) {
                    entries.push(ReportEntry::new(date, ReportSource::Remote));
                }
            }
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

/// Map a store result to its value, treating any failure as "nothing there".
///
/// Credential failures are logged at error level since they do not heal on
/// their own; everything else is a warning.
pub fn absorb<T: Default>(source: ReportSource, operation: &str, result: StoreResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log_absorbed(source, operation, &err);
            T::default()
        }
    }
}

fn log_absorbed(source: ReportSource, operation: &str, err: &StoreError) {
    if err.needs_operator() {
        error!(%source, operation, error = %err, "report store unavailable, treating as empty");
    } else {
        warn!(%source, operation, error = %err, "report store unavailable, treating as empty");
    }
}
