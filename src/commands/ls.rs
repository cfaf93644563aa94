//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which loads a configuration
//! and lists the resulting clusters with their selectors in display order.
//!
//! ## Output Formats
//!
//! - **Text** (default): one heading per cluster, one `token  title` line per
//!   selector.
//! - **JSON** (`--json`): an array of clusters as produced by `serde_json`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use selector_clusters::cluster::Cluster;
use selector_clusters::defaults::DEFAULT_CONFIG_FILENAME;
use selector_clusters::output::{cluster_heading, OutputConfig};
use selector_clusters::suggestions;

/// List the clusters and selectors a configuration declares
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path to the configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "SELECTOR_CLUSTERS_CONFIG"
    )]
    pub config: PathBuf,

    /// Only list this cluster.
    #[arg(long, value_name = "NAME")]
    pub cluster: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Show only the number of selectors per cluster.
    #[arg(long)]
    pub count: bool,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let registry = super::load_registry(&args.config)?;

    let clusters: Vec<&Cluster> = match &args.cluster {
        Some(name) => {
            let cluster = registry.get(name).ok_or_else(|| {
                let declared: Vec<&str> = registry.names().collect();
                suggestions::unknown_cluster(name, &declared)
            })?;
            vec![cluster]
        }
        None => registry.iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&clusters)?);
        return Ok(());
    }

    for cluster in clusters {
        if args.count {
            println!("{} {}", cluster_heading(&out, cluster.name()), cluster.len());
            continue;
        }
        print!("{}", render_cluster(&out, cluster));
    }
    Ok(())
}

/// Render one cluster as text, tokens padded to a common width.
pub(crate) fn render_cluster(out: &OutputConfig, cluster: &Cluster) -> String {
    let width = cluster.iter().map(|s| s.token().len()).max().unwrap_or(0);
    let mut rendered = format!("{}\n", cluster_heading(out, cluster.name()));
    for selector in cluster {
        rendered.push_str(&format!(
            "  {:<width$}  {}\n",
            selector.token(),
            selector.title(),
            width = width
        ));
    }
    rendered
}
