//! # Deferred Configuration Actions
//!
//! Declarations never touch the registry while a configuration source is
//! being read. Each handler schedules an [`Action`] on a [`ConfigContext`]
//! instead: a discriminator naming what the action configures, the origin
//! of the declaration, and a closure holding everything needed to apply it.
//!
//! ## Execution
//!
//! 1.  **Collection**: handlers call [`ConfigContext::schedule`] as
//!     declarations are read.
//! 2.  **Conflict check**: once the whole source has been read, two actions
//!     with equal discriminators abort the load with
//!     [`Error::DuplicateDeclaration`].
//! 3.  **Execution**: every action runs exactly once, in scheduling order.
//!     The first failing action aborts the load.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::registry::ClusterRegistry;

/// Uniqueness key of a scheduled action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminator {
    /// One selector, either flat or nested inside a cluster declaration.
    SelectorString {
        cluster: Option<String>,
        value: String,
        label: Option<String>,
    },
    /// The cluster-resolution step of a nested cluster declaration.
    SelectorCluster { name: String },
}

impl Discriminator {
    pub fn selector_string(
        cluster: Option<&str>,
        value: &str,
        label: Option<&str>,
    ) -> Self {
        Discriminator::SelectorString {
            cluster: cluster.map(str::to_string),
            value: value.to_string(),
            label: label.map(str::to_string),
        }
    }

    pub fn selector_cluster(name: &str) -> Self {
        Discriminator::SelectorCluster {
            name: name.to_string(),
        }
    }

    /// The declaration kind tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Discriminator::SelectorString { .. } => "selectorstring",
            Discriminator::SelectorCluster { .. } => "selectorcluster",
        }
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::SelectorString {
                cluster,
                value,
                label,
            } => write!(
                f,
                "({:?}, {:?}, {:?}, {:?})",
                self.kind(),
                cluster,
                value,
                label
            ),
            Discriminator::SelectorCluster { name } => {
                write!(f, "({:?}, {:?})", self.kind(), name)
            }
        }
    }
}

/// Where a declaration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// File path, or `<string>` for in-memory sources
    pub source: String,
    /// One-based position of the declaration within its source
    pub index: usize,
}

impl Origin {
    pub fn new(source: impl Into<String>, index: usize) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (declaration {})", self.source, self.index)
    }
}

/// The effect of an action, run against the registry at execution time.
pub type Callable = Box<dyn FnOnce(&mut ClusterRegistry) -> Result<()>>;

/// A scheduled, not yet applied, configuration effect.
pub struct Action {
    pub discriminator: Discriminator,
    pub origin: Origin,
    callable: Callable,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("discriminator", &self.discriminator)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Collects the actions of one configuration-loading run.
#[derive(Debug, Default)]
pub struct ConfigContext {
    actions: Vec<Action>,
}

impl ConfigContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Schedule `callable` to run once the whole configuration has been read.
    pub fn schedule<F>(&mut self, discriminator: Discriminator, origin: Origin, callable: F)
    where
        F: FnOnce(&mut ClusterRegistry) -> Result<()> + 'static,
    {
        debug!("Scheduling {} from {}", discriminator, origin);
        self.actions.push(Action {
            discriminator,
            origin,
            callable: Box::new(callable),
        });
    }

    /// Discriminators in scheduling order.
    pub fn discriminators(&self) -> impl Iterator<Item = &Discriminator> {
        self.actions.iter().map(|action| &action.discriminator)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Fail if any two scheduled actions share a discriminator.
    pub fn check_conflicts(&self) -> Result<()> {
        let mut seen: HashMap<&Discriminator, &Origin> = HashMap::new();
        for action in &self.actions {
            if let Some(first) = seen.insert(&action.discriminator, &action.origin) {
                return Err(Error::DuplicateDeclaration {
                    discriminator: action.discriminator.to_string(),
                    first: first.to_string(),
                    second: action.origin.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check for conflicts, then run every action in scheduling order.
    ///
    /// Returns the number of actions executed.
    pub fn execute(self, registry: &mut ClusterRegistry) -> Result<usize> {
        self.check_conflicts()?;

        let total = self.actions.len();
        for action in self.actions {
            debug!("Executing {} from {}", action.discriminator, action.origin);
            (action.callable)(registry)?;
        }
        Ok(total)
    }
}
