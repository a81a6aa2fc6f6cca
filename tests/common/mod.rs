//! Common test utilities for integration tests
//!
//! Provides in-memory and failing store doubles plus report-directory
//! fixtures shared across the integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use competeiq_reports::infrastructure::storage::FileReportStore;
use competeiq_reports::{
    LocalReportStore, RemoteReportStore, ReportDate, ReportResolver, StoreError, StoreResult,
};

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `{date}.html` files into `dir`.
pub fn seed_local(dir: &Path, reports: &[(&str, &str)]) {
    std::fs::create_dir_all(dir).expect("Failed to create reports dir");
    for (date, body) in reports {
        std::fs::write(dir.join(format!("{date}.html")), body).expect("Failed to write report");
    }
}

pub fn date(raw: &str) -> ReportDate {
    ReportDate::parse(raw).expect("test date should be valid")
}

/// Remote store double holding `(run_date, report_html)` rows.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    rows: Vec<(String, Option<String>)>,
    calls: AtomicUsize,
}

impl InMemoryRemoteStore {
    pub fn new(rows: &[(&str, Option<&str>)]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|(d, body)| ((*d).to_string(), body.map(str::to_string)))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reports(&self) -> impl Iterator<Item = (&String, &String)> {
        self.rows
            .iter()
            .filter_map(|(d, body)| body.as_ref().map(|b| (d, b)))
    }
}

#[async_trait]
impl RemoteReportStore for InMemoryRemoteStore {
    async fn latest_date(&self) -> StoreResult<Option<ReportDate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reports().map(|(d, _)| date(d)).max())
    }

    async fn fetch(&self, wanted: &ReportDate) -> StoreResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .reports()
            .find(|(d, _)| d.as_str() == wanted.as_str())
            .map(|(_, body)| body.clone()))
    }

    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut dates: Vec<ReportDate> = self.reports().map(|(d, _)| date(d)).collect();
        dates.sort_by(|a, b| b.cmp(a));
        Ok(dates)
    }
}

/// Remote store double that is always unreachable.
#[derive(Default)]
pub struct FailingRemoteStore {
    calls: AtomicUsize,
}

impl FailingRemoteStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Remote("connection refused".to_string()))
    }
}

#[async_trait]
impl RemoteReportStore for FailingRemoteStore {
    async fn latest_date(&self) -> StoreResult<Option<ReportDate>> {
        self.fail()
    }

    async fn fetch(&self, _date: &ReportDate) -> StoreResult<Option<String>> {
        self.fail()
    }

    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>> {
        self.fail()
    }
}

/// Local store wrapper that counts every call.
pub struct CountingLocalStore {
    inner: FileReportStore,
    calls: AtomicUsize,
}

impl CountingLocalStore {
    pub fn new(root: &Path) -> Self {
        Self {
            inner: FileReportStore::new(root),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocalReportStore for CountingLocalStore {
    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_dates().await
    }

    async fn read(&self, date: &ReportDate) -> StoreResult<Option<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.read(date).await
    }

    async fn write(&self, date: &ReportDate, body: &[u8]) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.write(date, body).await
    }

    fn location(&self) -> String {
        self.inner.location()
    }
}

/// Resolver over a file store at `root` and an optional remote double.
pub fn resolver(root: &Path, remote: Option<Arc<dyn RemoteReportStore>>) -> ReportResolver {
    ReportResolver::new(Arc::new(FileReportStore::new(root)), remote)
}
