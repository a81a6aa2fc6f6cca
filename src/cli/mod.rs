//! Command-line interface
//!
//! Parses arguments, loads configuration, and dispatches to the serve,
//! list, and latest commands.

pub mod commands;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Load configuration for this invocation.
pub fn load_config(cli: &Cli) -> Result<Config> {
    ConfigLoader::load_with(cli.config.as_deref(), &cli.overrides())
}

/// Run the command selected on the command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        None | Some(Commands::Serve { .. }) => commands::serve::execute(config).await,
        Some(Commands::List) => commands::list::execute(config, cli.json).await,
        Some(Commands::Latest) => commands::latest::execute(config, cli.json).await,
    }
}

/// Print a top-level error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
