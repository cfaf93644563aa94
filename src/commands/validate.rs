//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a
//! configuration without installing anything.
//!
//! ## Functionality
//!
//! - **Parsing**: reads the configuration and every file it includes.
//! - **Conflict Detection**: reports declarations with equal discriminators.
//! - **Dry Run**: applies the actions to a scratch registry so duplicate
//!   selectors inside a cluster are reported too.

use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

use selector_clusters::actions::{ConfigContext, Discriminator};
use selector_clusters::defaults::DEFAULT_CONFIG_FILENAME;
use selector_clusters::loader;
use selector_clusters::output::{emoji, OutputConfig};
use selector_clusters::registry::ClusterRegistry;

/// Check a configuration for errors and conflicts
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "SELECTOR_CLUSTERS_CONFIG"
    )]
    pub config: PathBuf,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = &args.config;

    if !config_path.exists() {
        return Err(selector_clusters::suggestions::config_not_found(config_path));
    }

    println!(
        "{} Validating configuration: {}",
        emoji(&out, "🔍", "[SCAN]"),
        config_path.display()
    );

    let mut ctx = ConfigContext::new();
    let declarations = match loader::schedule_file(config_path, &mut ctx) {
        Ok(count) => {
            println!(
                "{} Configuration parsed successfully",
                emoji(&out, "✅", "[OK]")
            );
            count
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!("Configuration parsing failed: {}", e));
        }
    };

    let clusters: BTreeSet<&str> = ctx
        .discriminators()
        .filter_map(|discriminator| match discriminator {
            Discriminator::SelectorString { cluster, .. } => cluster.as_deref(),
            Discriminator::SelectorCluster { name } => Some(name.as_str()),
        })
        .collect();
    let selectors = ctx
        .discriminators()
        .filter(|d| matches!(d, Discriminator::SelectorString { .. }))
        .count();

    println!("\n{} Configuration Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Declarations: {}", declarations);
    println!("   Clusters: {}", clusters.len());
    println!("   Selectors: {}", selectors);

    if let Err(e) = ctx.check_conflicts() {
        println!("\n{} {}", emoji(&out, "❌", "[ERR]"), e);
        return Err(anyhow::anyhow!("Validation failed: {}", e));
    }
    println!(
        "\n{} No conflicting declarations",
        emoji(&out, "✅", "[OK]")
    );

    let mut scratch = ClusterRegistry::new();
    if let Err(e) = ctx.execute(&mut scratch) {
        println!("{} {}", emoji(&out, "❌", "[ERR]"), e);
        return Err(anyhow::anyhow!("Validation failed: {}", e));
    }
    println!(
        "{} All selectors register cleanly",
        emoji(&out, "✅", "[OK]")
    );

    println!("\n{} Configuration is valid", emoji(&out, "🎉", "[DONE]"));
    Ok(())
}
