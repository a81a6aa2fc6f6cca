//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::config::{
    ConfigOverrides, LoggingOverrides, ServerOverrides, StorageOverrides,
};

#[derive(Parser, Debug)]
#[command(name = "competeiq-reports")]
#[command(about = "Serve CompeteIQ competitive intelligence reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a YAML config file (defaults to ./competeiq.yaml if present)
    #[arg(short, long, global = true, env = "COMPETEIQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding {date}.html report files
    #[arg(long, global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List every known report, newest first
    List,

    /// Print the date of the latest report
    Latest,
}

impl Cli {
    /// Command-line settings that override file and environment config.
    pub fn overrides(&self) -> ConfigOverrides {
        let (host, port) = match &self.command {
            Some(Commands::Serve { host, port }) => (host.clone(), *port),
            _ => (None, None),
        };
        ConfigOverrides {
            server: ServerOverrides { host, port },
            storage: StorageOverrides {
                reports_dir: self.reports_dir.clone(),
            },
            logging: LoggingOverrides {
                level: self.log_level.clone(),
            },
        }
    }
}
