//! # Error Handling
//!
//! This module defines the centralized error type for `selector-clusters`.
//! It uses the `thiserror` library to create an `Error` enum covering every
//! failure a configuration-loading run can hit, with messages that name the
//! offending cluster, value, label or declaration.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every error raised while loading is fatal to that load: a configuration
//! file is applied completely or not at all.

use thiserror::Error;

/// Main error type for selector-clusters operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration source could not be turned into declarations.
    ///
    /// Includes the specific issue and optionally a hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Registering a selector would have duplicated an existing value or
    /// token in the same cluster.
    #[error("Adding selector (value={value:?}, label={label:?}) to cluster {cluster:?} resulted in a duplicate entry")]
    DuplicateEntry {
        cluster: String,
        value: String,
        label: Option<String>,
    },

    /// Two declarations produced the same discriminator.
    #[error("Conflicting configuration declarations: {discriminator}\n  first declared at {first}\n  again at {second}")]
    DuplicateDeclaration {
        discriminator: String,
        first: String,
        second: String,
    },

    /// A nested selector action ran before its enclosing cluster was resolved.
    #[error("Cluster {name:?} was not resolved before its selectors were registered")]
    ClusterNotResolved { name: String },

    /// A cluster id did not refer to a cluster in this registry.
    #[error("Unknown cluster id {id}")]
    UnknownCluster { id: usize },

    /// A configuration file includes itself, directly or indirectly.
    #[error("Include cycle detected: {cycle}")]
    IncludeCycle { cycle: String },

    /// The process-wide registry was installed more than once.
    #[error("A cluster registry has already been installed for this process")]
    RegistryInstalled,

    /// An XML configuration document could not be parsed.
    #[error("XML parsing error: {message}")]
    Xml { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_parse() {
        let error = Error::ConfigParse {
            message: "Invalid YAML".to_string(),
            hint: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("Invalid YAML"));
        assert!(!display.contains("hint:"));
    }

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "selectorstring is missing a cluster".to_string(),
            hint: Some("Add 'cluster:' to the selectorstring".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("missing a cluster"));
        assert!(display.contains("hint:"));
        assert!(display.contains("Add 'cluster:'"));
    }

    #[test]
    fn test_error_display_duplicate_entry() {
        let error = Error::DuplicateEntry {
            cluster: "docfolders".to_string(),
            value: "/a/".to_string(),
            label: Some("A".to_string()),
        };
        insta::assert_snapshot!(
            error.to_string(),
            @r#"Adding selector (value="/a/", label=Some("A")) to cluster "docfolders" resulted in a duplicate entry"#
        );
    }

    #[test]
    fn test_error_display_duplicate_declaration() {
        let error = Error::DuplicateDeclaration {
            discriminator: "(selectorcluster, \"sitevids\")".to_string(),
            first: "a.yaml#1".to_string(),
            second: "b.yaml#4".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Conflicting configuration declarations"));
        assert!(display.contains("selectorcluster"));
        assert!(display.contains("a.yaml#1"));
        assert!(display.contains("b.yaml#4"));
    }

    #[test]
    fn test_error_display_include_cycle() {
        let error = Error::IncludeCycle {
            cycle: "a.yaml -> b.yaml -> a.yaml".to_string(),
        };
        assert!(error.to_string().contains("a.yaml -> b.yaml -> a.yaml"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_str = "invalid: [unclosed";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: Error = yaml_error.into();
        assert!(error.to_string().contains("YAML parsing error"));
    }
}
