//! # Get Command Implementation
//!
//! Resolves a vocabulary by cluster name, the way application code would,
//! and prints the title of the selector with the given token.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use selector_clusters::defaults::DEFAULT_CONFIG_FILENAME;
use selector_clusters::suggestions;

/// Look up one selector by cluster name and token
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Name of the cluster.
    pub cluster: String,

    /// Token of the selector.
    pub token: String,

    /// Path to the configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "SELECTOR_CLUSTERS_CONFIG"
    )]
    pub config: PathBuf,

    /// Print the stored value instead of the title.
    #[arg(long)]
    pub value: bool,
}

/// Execute the `get` command.
pub fn execute(args: GetArgs) -> Result<()> {
    let registry = super::load_registry(&args.config)?;

    let cluster = registry.resolve_vocabulary(&args.cluster).ok_or_else(|| {
        let declared: Vec<&str> = registry.names().collect();
        suggestions::unknown_cluster(&args.cluster, &declared)
    })?;
    let selector = cluster
        .get_by_token(&args.token)
        .ok_or_else(|| suggestions::unknown_token(&args.cluster, &args.token))?;

    if args.value {
        println!("{}", selector.value());
    } else {
        println!("{}", selector.title());
    }
    Ok(())
}
