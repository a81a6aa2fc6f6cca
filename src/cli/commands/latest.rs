//! `latest`: print the date of the most recent report.

use anyhow::Result;

use super::init_cli_tracing;
use crate::domain::models::Config;
use crate::infrastructure::setup::build_resolver;

pub async fn execute(config: Config, json: bool) -> Result<()> {
    init_cli_tracing();
    let resolver = build_resolver(&config)?;
    let date = resolver.resolve_latest().await?;

    if json {
        println!("{}", serde_json::json!({ "date": date }));
    } else {
        println!("{date}");
    }
    Ok(())
}
