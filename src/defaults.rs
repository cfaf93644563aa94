//! Default values shared by the CLI commands.

/// Configuration file read when no `--config` is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "selectors.yaml";

/// Environment variable that overrides the configuration path.
pub const CONFIG_ENV_VAR: &str = "SELECTOR_CLUSTERS_CONFIG";

/// Log level used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
