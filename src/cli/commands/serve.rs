//! `serve`: run the HTTP server until Ctrl-C or SIGTERM.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::adapters::http::{ReportsHttpConfig, ReportsHttpServer};
use crate::domain::models::Config;
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::setup::build_resolver;

pub async fn execute(config: Config) -> Result<()> {
    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;

    info!(config = ?config, "configuration loaded");

    let resolver = Arc::new(build_resolver(&config)?);
    let server = ReportsHttpServer::new(resolver, ReportsHttpConfig::from(&config.server));

    server
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!(e))
        .context("Reports server failed")?;

    info!("reports server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
