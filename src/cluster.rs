//! # Clusters of Selectors
//!
//! A `Cluster` is the named, ordered collection of selectors that a dropdown
//! renders. Entries keep their registration order and can be looked up by
//! value or by token.
//!
//! ## Invariants
//!
//! The ordered entry list, the value index and the token index always hold
//! the same entries. `register` checks both indexes before touching any of
//! them, so a rejected duplicate leaves the cluster exactly as it was.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::selector::{Selector, SelectorValue};

/// A named, deduplicated, order-preserving collection of selectors.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    name: String,
    entries: Vec<Selector>,
    #[serde(skip)]
    by_value: HashMap<SelectorValue, usize>,
    #[serde(skip)]
    by_token: HashMap<String, usize>,
}

impl Cluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            by_value: HashMap::new(),
            by_token: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a selector built from `value` and `label`.
    ///
    /// Fails with [`Error::DuplicateEntry`] if the value, or the token derived
    /// from it, is already present. Nothing is inserted in that case.
    pub fn register(
        &mut self,
        value: impl Into<SelectorValue>,
        label: Option<String>,
    ) -> Result<&Selector> {
        let selector = Selector::new(value, label);

        if self.by_value.contains_key(selector.value())
            || self.by_token.contains_key(selector.token())
        {
            return Err(Error::DuplicateEntry {
                cluster: self.name.clone(),
                value: selector.value().to_string(),
                label: selector.label().map(str::to_string),
            });
        }

        let index = self.entries.len();
        self.by_value.insert(selector.value().clone(), index);
        self.by_token.insert(selector.token().to_string(), index);
        self.entries.push(selector);

        debug_assert_eq!(self.by_value.len(), self.entries.len());
        debug_assert_eq!(self.by_token.len(), self.entries.len());

        Ok(&self.entries[index])
    }

    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Selector> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Selector] {
        &self.entries
    }

    pub fn get_by_value(&self, value: &SelectorValue) -> Option<&Selector> {
        self.by_value.get(value).map(|&index| &self.entries[index])
    }

    pub fn get_by_token(&self, token: &str) -> Option<&Selector> {
        self.by_token.get(token).map(|&index| &self.entries[index])
    }

    pub fn contains_value(&self, value: &SelectorValue) -> bool {
        self.by_value.contains_key(value)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Zero-based display position of the entry with this token.
    pub fn position_of_token(&self, token: &str) -> Option<usize> {
        self.by_token.get(token).copied()
    }

    /// Titles in display order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Selector::title)
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Selector;
    type IntoIter = std::slice::Iter<'a, Selector>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
