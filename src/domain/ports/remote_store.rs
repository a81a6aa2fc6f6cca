use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::ReportDate;

/// Remote table of report rows keyed by run date.
///
/// Rows without a report body are not reports and never surface through
/// this trait.
#[async_trait]
pub trait RemoteReportStore: Send + Sync {
    /// Greatest run date that carries a report body.
    async fn latest_date(&self) -> StoreResult<Option<ReportDate>>;

    /// Report body for exactly `date`.
    async fn fetch(&self, date: &ReportDate) -> StoreResult<Option<String>>;

    /// Every run date that carries a report body, newest first.
    ///
    /// May contain duplicates when several rows share a date.
    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>>;
}
