//! `list`: print every known report, newest first.

use anyhow::Result;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use super::init_cli_tracing;
use crate::domain::models::{Config, ReportEntry};
use crate::infrastructure::setup::build_resolver;

pub async fn execute(config: Config, json: bool) -> Result<()> {
    init_cli_tracing();
    let resolver = build_resolver(&config)?;
    let entries = resolver.list_all().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", format_entries(&entries));
    }
    Ok(())
}

/// Render report entries as a table.
pub fn format_entries(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return "No reports found.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("").add_attribute(Attribute::Bold),
    ]);

    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(entry.date.as_str()),
            Cell::new(entry.source.as_str()),
            Cell::new(if i == 0 { "latest" } else { "" }),
        ]);
    }

    table.to_string()
}
