//! # Selector Clusters CLI
//!
//! This is the binary entry point for the `selector-clusters` command-line
//! tool. It parses arguments with `clap`, sets up logging and dispatches to
//! the subcommand. The loading logic lives in the library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
