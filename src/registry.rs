//! # Cluster Registry
//!
//! The registry owns every cluster declared during a configuration load,
//! keyed by cluster name, together with a vocabulary factory per cluster that
//! lets unrelated code resolve "the vocabulary named X" back to its cluster.
//!
//! A registry is passed explicitly to the code that loads configuration. Once
//! loading has finished it can be installed as the process-wide, read-only
//! registry with [`install`] and read back with [`global`].

use std::collections::HashMap;
use std::sync::OnceLock;

use log::info;

use crate::cluster::Cluster;
use crate::error::{Error, Result};

/// Stable handle to a cluster inside one [`ClusterRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(usize);

impl ClusterId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Resolves a vocabulary name to its cluster.
///
/// The factory creates nothing: it only looks its cluster up again by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyFactory {
    name: String,
}

impl VocabularyFactory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve<'r>(&self, registry: &'r ClusterRegistry) -> Option<&'r Cluster> {
        registry.get(&self.name)
    }
}

/// Name-keyed store of clusters and their vocabulary factories.
#[derive(Debug, Default)]
pub struct ClusterRegistry {
    clusters: Vec<Cluster>,
    by_name: HashMap<String, ClusterId>,
    vocabularies: HashMap<String, VocabularyFactory>,
}

impl ClusterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<ClusterId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Cluster> {
        self.id_of(name).map(|id| &self.clusters[id.0])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Cluster> {
        let id = self.id_of(name)?;
        self.clusters.get_mut(id.0)
    }

    pub fn cluster(&self, id: ClusterId) -> Result<&Cluster> {
        self.clusters
            .get(id.0)
            .ok_or(Error::UnknownCluster { id: id.0 })
    }

    pub fn cluster_mut(&mut self, id: ClusterId) -> Result<&mut Cluster> {
        self.clusters
            .get_mut(id.0)
            .ok_or(Error::UnknownCluster { id: id.0 })
    }

    /// Look up the cluster called `name`, creating it if needed.
    ///
    /// Creation also registers a [`VocabularyFactory`] under the same name.
    /// Returns the cluster's id and whether it was created by this call.
    pub fn get_or_create(&mut self, name: &str) -> (ClusterId, bool) {
        if let Some(id) = self.id_of(name) {
            return (id, false);
        }

        info!("No such cluster as {:?}, creating one", name);
        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster::new(name));
        self.by_name.insert(name.to_string(), id);
        self.vocabularies.insert(
            name.to_string(),
            VocabularyFactory {
                name: name.to_string(),
            },
        );
        (id, true)
    }

    pub fn vocabulary(&self, name: &str) -> Option<&VocabularyFactory> {
        self.vocabularies.get(name)
    }

    /// Resolve a vocabulary by name through its factory.
    pub fn resolve_vocabulary(&self, name: &str) -> Option<&Cluster> {
        self.vocabulary(name)?.resolve(self)
    }

    /// Clusters in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Cluster names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clusters.iter().map(Cluster::name)
    }
}

static GLOBAL: OnceLock<ClusterRegistry> = OnceLock::new();

/// Install a fully loaded registry as the process-wide registry.
///
/// Fails with [`Error::RegistryInstalled`] if one is already installed.
pub fn install(registry: ClusterRegistry) -> Result<&'static ClusterRegistry> {
    GLOBAL
        .set(registry)
        .map_err(|_| Error::RegistryInstalled)?;
    GLOBAL.get().ok_or(Error::RegistryInstalled)
}

/// The process-wide registry, if one has been installed.
pub fn global() -> Option<&'static ClusterRegistry> {
    GLOBAL.get()
}
