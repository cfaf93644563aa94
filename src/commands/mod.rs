//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `selector_clusters` library.

pub mod get;
pub mod ls;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use selector_clusters::loader;
use selector_clusters::registry::ClusterRegistry;

/// Load `config_path` into a fresh registry.
pub(crate) fn load_registry(config_path: &Path) -> Result<ClusterRegistry> {
    if !config_path.exists() {
        return Err(selector_clusters::suggestions::config_not_found(config_path));
    }

    let mut registry = ClusterRegistry::new();
    loader::load_file(config_path, &mut registry).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
        )
    })?;
    Ok(registry)
}
