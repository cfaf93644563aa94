//! # Declaration Handlers
//!
//! Handlers turn validated declarations into deferred actions. There are two
//! declaration forms, and both end up appending selectors to the same
//! registry of clusters.
//!
//! - **Flat**: a single `selectorstring` naming its own cluster, handled by
//!   [`selector_string`].
//! - **Nested**: a `selectorcluster` with child `selectorstring` entries,
//!   handled by [`SelectorClusterHandler`]. Opening the handler schedules the
//!   cluster resolution; every child schedules its own registration against
//!   the cluster that resolution produced.
//!
//! No handler mutates the registry. Everything happens when the
//! [`ConfigContext`] executes its actions after the whole source is read.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::actions::{Action, ConfigContext, Discriminator, Origin};
use crate::error::{Error, Result};
use crate::registry::ClusterId;

/// Handle a flat `selectorstring` declaration.
///
/// A missing or empty `cluster` is rejected here rather than defaulted.
pub fn selector_string(
    ctx: &mut ConfigContext,
    origin: Origin,
    cluster: Option<&str>,
    value: &str,
    label: Option<&str>,
) -> Result<()> {
    let cluster_name = match cluster {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(Error::ConfigParse {
                message: format!("selectorstring {:?} at {} has no cluster", value, origin),
                hint: Some(
                    "Add a 'cluster' attribute, or move the selector inside a selectorcluster"
                        .to_string(),
                ),
            })
        }
    };

    let discriminator = Discriminator::selector_string(cluster, value, label);
    let value = value.to_string();
    let label = label.map(str::to_string);

    ctx.schedule(discriminator, origin, move |registry| {
        let (id, _) = registry.get_or_create(&cluster_name);
        registry.cluster_mut(id)?.register(value, label)?;
        Ok(())
    });
    Ok(())
}

/// Handler for a nested `selectorcluster` declaration.
#[derive(Debug)]
pub struct SelectorClusterHandler {
    name: String,
    cluster: Rc<Cell<Option<ClusterId>>>,
}

impl SelectorClusterHandler {
    /// Open the cluster declaration and schedule its resolution.
    pub fn open(ctx: &mut ConfigContext, origin: Origin, name: &str) -> Self {
        let cluster = Rc::new(Cell::new(None));
        let resolved = Rc::clone(&cluster);
        let cluster_name = name.to_string();

        ctx.schedule(
            Discriminator::selector_cluster(name),
            origin,
            move |registry| {
                debug!("Resolving cluster {:?}", cluster_name);
                let (id, _) = registry.get_or_create(&cluster_name);
                resolved.set(Some(id));
                Ok(())
            },
        );

        Self {
            name: name.to_string(),
            cluster,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle one nested `selectorstring`.
    ///
    /// Its action relies on the resolution scheduled by [`Self::open`] having
    /// run first, which in-order execution guarantees.
    pub fn selector_string(
        &self,
        ctx: &mut ConfigContext,
        origin: Origin,
        value: &str,
        label: Option<&str>,
    ) {
        let discriminator = Discriminator::selector_string(Some(&self.name), value, label);
        let cluster = Rc::clone(&self.cluster);
        let name = self.name.clone();
        let value = value.to_string();
        let label = label.map(str::to_string);

        ctx.schedule(discriminator, origin, move |registry| {
            let id = cluster.get().ok_or(Error::ClusterNotResolved { name })?;
            registry.cluster_mut(id)?.register(value, label)?;
            Ok(())
        });
    }

    /// Close the declaration. Contributes no further actions.
    pub fn close(self) -> Vec<Action> {
        Vec::new()
    }
}
