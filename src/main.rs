//! CompeteIQ report server entry point.

use clap::Parser;

use competeiq_reports::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // A missing .env is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli::run(cli).await {
        cli::handle_error(err, json);
    }
}
