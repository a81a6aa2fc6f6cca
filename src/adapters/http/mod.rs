//! HTTP surface for browsing reports.

pub mod index_page;
pub mod reports_http;

pub use reports_http::{HealthResponse, ReportsHttpConfig, ReportsHttpServer};
