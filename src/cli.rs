//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use selector_clusters::defaults::DEFAULT_LOG_LEVEL;

use crate::commands;

/// Selector Clusters - Declare dropdown choices in configuration files
#[derive(Parser, Debug)]
#[command(name = "selector-clusters")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace). Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a configuration for errors and conflicts without applying it
    Validate(commands::validate::ValidateArgs),

    /// Load a configuration and list its clusters and selectors
    Ls(commands::ls::LsArgs),

    /// Look up one selector by cluster name and token
    Get(commands::get::GetArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Ls(args) => commands::ls::execute(args, &self.color),
            Commands::Get(args) => commands::get::execute(args),
        }
    }

    fn init_logging(&self) {
        let mut builder =
            env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL));
        if let Some(level) = &self.log_level {
            builder.parse_filters(level);
        }
        builder.format_timestamp(None);
        // A logger may already be installed when running under a test harness.
        let _ = builder.try_init();
    }
}
