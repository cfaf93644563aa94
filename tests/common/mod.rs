//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_config(configs::SITEVIDS);
//! fixture.command().arg("ls").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// A nested cluster with two labelled selectors.
    pub const SITEVIDS: &str = r#"
- selectorcluster:
    name: sitevids
    selectors:
      - value: /delta/
        label: Delta Path
      - value: /omega/
        label: Omega Path
"#;

    /// Two flat declarations sharing a cluster.
    pub const DOCFOLDERS: &str = r#"
- selectorstring:
    cluster: docfolders
    value: /home/jeff/photos/
    label: Personal Photos
- selectorstring:
    cluster: docfolders
    value: /other/
"#;

    /// The same flat declaration twice.
    pub const CONFLICTING: &str = r#"
- selectorstring: { cluster: docfolders, value: /a/, label: A }
- selectorstring: { cluster: docfolders, value: /a/, label: A }
"#;

    /// The same value twice with different labels.
    pub const DUPLICATE_VALUE: &str = r#"
- selectorstring: { cluster: docfolders, value: /a/, label: A }
- selectorstring: { cluster: docfolders, value: /a/, label: B }
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "- selectorstring: [unclosed";

    /// The nested example as XML.
    pub const SITEVIDS_XML: &str = r#"<configure>
  <selectorcluster name="sitevids">
    <selectorstring label="Delta Path" value="/delta/"/>
    <selectorstring label="Omega Path" value="/omega/"/>
  </selectorcluster>
</configure>
"#;
}

/// A temporary directory with an optional `selectors.yaml`.
#[allow(dead_code)]
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `selectors.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("selectors.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the default config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("selectors.yaml")
    }

    /// A command for the binary, run inside the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("selector-clusters");
        cmd.current_dir(self.path())
            .env_remove("SELECTOR_CLUSTERS_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::SITEVIDS);
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_configs_parse() {
        for config in [
            configs::SITEVIDS,
            configs::DOCFOLDERS,
            configs::CONFLICTING,
            configs::DUPLICATE_VALUE,
        ] {
            selector_clusters::config::parse(config).expect("Config should parse");
        }
        selector_clusters::config::parse_xml(configs::SITEVIDS_XML).expect("XML should parse");
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        assert!(selector_clusters::config::parse(configs::INVALID_YAML).is_err());
    }
}
