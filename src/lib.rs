//! # Selector Clusters Library
//!
//! Declare named clusters of (value, label) pairs in configuration files and
//! use them as dropdown choices elsewhere in an application.
//!
//! ## Quick Example
//!
//! ```
//! use selector_clusters::config::Format;
//! use selector_clusters::loader;
//! use selector_clusters::registry::ClusterRegistry;
//!
//! let yaml = r#"
//! - selectorcluster:
//!     name: sitevids
//!     selectors:
//!       - value: /delta/
//!         label: Delta Path
//!       - value: /omega/
//!         label: Omega Path
//! - selectorstring:
//!     cluster: docfolders
//!     value: /home/jeff/photos/
//!     label: Personal Photos
//! "#;
//!
//! let mut registry = ClusterRegistry::new();
//! loader::load_str(yaml, Format::Yaml, &mut registry).unwrap();
//!
//! let sitevids = registry.resolve_vocabulary("sitevids").unwrap();
//! assert_eq!(sitevids.get_by_token("/delta/").unwrap().title(), "Delta Path");
//! assert_eq!(registry.get("docfolders").unwrap().len(), 1);
//! ```
//!
//! ## Core Concepts
//!
//! - **Selectors (`selector`)**: one pick choice, with the value used
//!   internally, its string token and the title shown to users.
//! - **Clusters (`cluster`)**: an ordered, deduplicated collection of
//!   selectors, addressable by value or token.
//! - **Registry (`registry`)**: every cluster of a load, by name, plus a
//!   vocabulary factory per cluster.
//! - **Actions (`actions`)**: deferred effects keyed by a discriminator.
//! - **Directives (`directives`)**: handlers for the flat `selectorstring`
//!   and nested `selectorcluster` declarations.
//! - **Configuration (`config`)**: YAML and XML declaration parsing.
//!
//! ## Execution Flow
//!
//! [`loader`] reads the whole configuration first, scheduling one action per
//! declaration. Only once everything has been read, and no two declarations
//! conflict, are the actions applied to the registry, in declaration order.

pub mod actions;
pub mod cluster;
pub mod config;
pub mod defaults;
pub mod directives;
pub mod error;
pub mod loader;
pub mod output;
pub mod registry;
pub mod selector;
pub mod suggestions;

#[cfg(test)]
mod cluster_proptest;
