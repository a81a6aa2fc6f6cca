//! PostgREST client for the `analysis_runs` table.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::SupabaseError;
use super::types::{ReportHtmlRow, RunDateRow};
use crate::domain::errors::StoreResult;
use crate::domain::models::{RemoteCredentials, RemoteStoreConfig, ReportDate};
use crate::domain::ports::RemoteReportStore;

/// Connection settings for [`SupabaseReportStore`].
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub credentials: RemoteCredentials,
    pub table: String,
    pub timeout: Option<Duration>,
}

impl SupabaseConfig {
    /// Settings from the remote section of the service config, if remote
    /// mode is enabled.
    pub fn from_remote(remote: &RemoteStoreConfig) -> Option<Self> {
        remote.credentials().map(|credentials| Self {
            credentials,
            table: remote.table.clone(),
            timeout: remote.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Remote report store backed by Supabase's REST interface.
///
/// Every query filters out rows whose `report_html` is null.
#[derive(Debug, Clone)]
pub struct SupabaseReportStore {
    http: Client,
    rows_url: String,
    api_key: String,
}

impl SupabaseReportStore {
    pub fn new(config: SupabaseConfig) -> Result<Self, SupabaseError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SupabaseError::InvalidConfig(e.to_string()))?;

        let rows_url = format!(
            "{}/rest/v1/{}",
            config.credentials.url.trim_end_matches('/'),
            config.table
        );

        Ok(Self {
            http,
            rows_url,
            api_key: config.credentials.key,
        })
    }

    /// Issue an authorized GET against the table and decode the rows.
    async fn select<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, SupabaseError> {
        let response = self
            .http
            .get(&self.rows_url)
            .query(query)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(SupabaseError::from_status(status, body));
        }

        let rows = response.json::<Vec<T>>().await?;
        debug!(rows = rows.len(), "supabase query returned");
        Ok(rows)
    }
}

/// Keep well-formed dates; a malformed `run_date` is a data problem, not an
/// outage, so it is logged and skipped rather than failing the query.
fn valid_dates(rows: Vec<RunDateRow>) -> Vec<ReportDate> {
    rows.into_iter()
        .filter_map(|row| match ReportDate::parse(&row.run_date) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!(run_date = %row.run_date, "skipping remote row with malformed run_date");
                None
            }
        })
        .collect()
}

#[async_trait]
impl RemoteReportStore for SupabaseReportStore {
    /// Maximum over every row with a body; malformed dates are skipped first.
    #[instrument(skip(self))]
    async fn latest_date(&self) -> StoreResult<Option<ReportDate>> {
        let rows: Vec<RunDateRow> = self
            .select(&[
                ("select", "run_date"),
                ("report_html", "not.is.null"),
                ("order", "run_date.desc"),
            ])
            .await?;
        Ok(valid_dates(rows).into_iter().max())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, date: &ReportDate) -> StoreResult<Option<String>> {
        let run_date = format!("eq.{date}");
        let rows: Vec<ReportHtmlRow> = self
            .select(&[
                ("select", "report_html"),
                ("run_date", run_date.as_str()),
                ("report_html", "not.is.null"),
                ("limit", "1"),
            ])
            .await?;
        Ok(rows.into_iter().find_map(|row| row.report_html))
    }

    #[instrument(skip(self))]
    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>> {
        let rows: Vec<RunDateRow> = self
            .select(&[
                ("select", "run_date"),
                ("report_html", "not.is.null"),
                ("order", "run_date.desc"),
            ])
            .await?;
        Ok(valid_dates(rows))
    }
}
