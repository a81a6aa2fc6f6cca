//! Domain errors for the report server.

use thiserror::Error;

use crate::domain::models::ReportDate;

/// Errors a report lookup can surface to its caller.
///
/// The `Display` strings are the exact plain-text bodies served over HTTP.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The requested date key is not shaped `YYYY-MM-DD`.
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat(String),

    /// Neither store holds a report for the date.
    #[error("No report found for {0}.")]
    NotFound(ReportDate),

    /// Neither store holds any report at all.
    #[error("No reports found.")]
    NoReports,
}

/// Failures reaching a report store.
///
/// These never cross the resolver boundary: the resolver maps every one of
/// them to an empty result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Local store I/O error: {0}")]
    Local(#[from] std::io::Error),

    #[error("Remote store unavailable: {0}")]
    Remote(String),

    #[error("Remote store rejected credentials: {0}")]
    RemoteAuth(String),

    #[error("Remote store returned a malformed response: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Credential failures keep failing until an operator intervenes.
    pub const fn needs_operator(&self) -> bool {
        matches!(self, Self::RemoteAuth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_messages() {
        let date = ReportDate::parse("2099-01-01").unwrap();
        assert_eq!(
            ReportError::InvalidDateFormat("abc".to_string()).to_string(),
            "Invalid date format. Use YYYY-MM-DD."
        );
        assert_eq!(
            ReportError::NotFound(date).to_string(),
            "No report found for 2099-01-01."
        );
        assert_eq!(ReportError::NoReports.to_string(), "No reports found.");
    }

    #[test]
    fn test_only_auth_failures_need_operator() {
        assert!(StoreError::RemoteAuth("401".into()).needs_operator());
        assert!(!StoreError::Remote("timeout".into()).needs_operator());
        assert!(!StoreError::Decode("eof".into()).needs_operator());
    }
}
