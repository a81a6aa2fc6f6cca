use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::ReportDate;

/// Date-keyed store of report bodies on local storage.
#[async_trait]
pub trait LocalReportStore: Send + Sync {
    /// All report dates present, in no particular order.
    ///
    /// A store that has never been created is empty, not an error.
    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>>;

    /// Raw bytes stored under `date`, or `None` if absent.
    ///
    /// An entry that exists but cannot be read is an error, never `None`.
    async fn read(&self, date: &ReportDate) -> StoreResult<Option<Vec<u8>>>;

    /// Store `body` under `date`, creating the store if needed.
    ///
    /// Overwrites any existing entry.
    async fn write(&self, date: &ReportDate, body: &[u8]) -> StoreResult<()>;

    /// Human-readable location, reported by the health endpoint.
    fn location(&self) -> String;
}
