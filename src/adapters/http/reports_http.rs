//! Reports HTTP Server.
//!
//! Serves stored reports by date, redirects to the latest one, and renders
//! an index of everything the resolver knows about. GET only.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::index_page::render_index;
use crate::domain::errors::ReportError;
use crate::domain::models::ServerConfig;
use crate::services::ReportResolver;

/// Configuration for the reports HTTP server.
#[derive(Debug, Clone)]
pub struct ReportsHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
}

impl Default for ReportsHttpConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ReportsHttpConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            enable_cors: server.enable_cors,
        }
    }
}

/// Response for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether the remote store is configured (not whether it is reachable).
    pub supabase: bool,
    #[serde(rename = "reportsDir")]
    pub reports_dir: String,
}

/// Reports HTTP Server.
pub struct ReportsHttpServer {
    config: ReportsHttpConfig,
    resolver: Arc<ReportResolver>,
}

impl ReportsHttpServer {
    pub fn new(resolver: Arc<ReportResolver>, config: ReportsHttpConfig) -> Self {
        Self { config, resolver }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let app = Router::new()
            .route("/", get(root_redirect))
            .route("/health", get(health_check))
            .route("/reports", get(list_reports))
            .route("/report/latest", get(latest_report))
            .route("/report/{date}", get(report_by_date))
            .with_state(self.resolver.clone());

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.config.host, self.config.port).parse()
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Reports server listening on http://{}", addr);
        tracing::info!("  Reports index:  http://{}/reports", addr);
        tracing::info!("  Latest report:  http://{}/report/latest", addr);
        tracing::info!("  Health check:   http://{}/health", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateFormat(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::NoReports => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// `302 Found` to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

// Handler functions

async fn root_redirect() -> Response {
    found("/reports".to_string())
}

async fn health_check(State(resolver): State<Arc<ReportResolver>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        supabase: resolver.remote_configured(),
        reports_dir: resolver.local_location(),
    })
}

async fn latest_report(State(resolver): State<Arc<ReportResolver>>) -> Result<Response, ReportError> {
    let date = resolver.resolve_latest().await?;
    Ok(found(format!("/report/{date}")))
}

async fn report_by_date(
    State(resolver): State<Arc<ReportResolver>>,
    Path(date): Path<String>,
) -> Result<Html<Vec<u8>>, ReportError> {
    let report = resolver.resolve_by_date(&date).await?;
    tracing::debug!(date = %report.date, source = %report.source, "serving report");
    Ok(Html(report.body))
}

async fn list_reports(State(resolver): State<Arc<ReportResolver>>) -> Html<String> {
    let entries = resolver.list_all().await;
    Html(render_index(&entries))
}
