use serde::Deserialize;

/// `select=run_date` projection of an `analysis_runs` row.
#[derive(Debug, Clone, Deserialize)]
pub struct RunDateRow {
    pub run_date: String,
}

/// `select=report_html` projection of an `analysis_runs` row.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportHtmlRow {
    #[serde(default)]
    pub report_html: Option<String>,
}
