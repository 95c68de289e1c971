//! The admin-authored overlay: per-category additions, edits, and tombstones.

use crate::error::Result;
use crate::item::MenuItem;
use crate::store::{LocalStore, OVERLAY_KEY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// The only mutable persisted state: category name mapped to an ordered list
/// of override entries.
///
/// An entry sharing an id with a base item shadows it in place; a novel id is
/// a pure addition; an entry with `deleted` set is a tombstone suppressing
/// the shadowed base item. The `BTreeMap` keeps category iteration
/// deterministic, which the merge relies on for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overlay(BTreeMap<String, Vec<MenuItem>>);

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the overlay from the store.
    ///
    /// A missing, unreadable, or malformed blob is treated as an empty
    /// overlay so a bad write can never take the menu down; merged views
    /// degrade to the base catalog.
    pub fn load(store: &dyn LocalStore) -> Self {
        let raw = match store.get(OVERLAY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!("overlay read failed, falling back to base catalog: {err}");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(overlay) => overlay,
            Err(err) => {
                warn!("overlay blob is malformed, falling back to base catalog: {err}");
                Self::default()
            }
        }
    }

    /// Persist the whole overlay as a single value replace.
    pub fn save(&self, store: &dyn LocalStore) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        store.set(OVERLAY_KEY, &raw)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.0
            .iter()
            .map(|(category, items)| (category.as_str(), items.as_slice()))
    }

    pub fn entries(&self, category: &str) -> &[MenuItem] {
        self.0.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable entry list for a category, created on first use.
    pub fn entries_mut(&mut self, category: &str) -> &mut Vec<MenuItem> {
        self.0.entry(category.to_string()).or_default()
    }

    /// Total number of override entries across all categories.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}
