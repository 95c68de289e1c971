//! Catalog merge engine: one deterministic, ordered item list out of the
//! immutable base catalog plus the admin overlay.

use crate::item::{Catalog, MenuItem};
use crate::overlay::Overlay;

/// Items without an explicit `order` sort after every explicitly ordered one.
const ORDER_SENTINEL: u32 = 9999;

/// Merge the base catalog with the overlay.
///
/// The working list starts as a copy of the base items in their original
/// order. Overlay entries are applied per category in overlay-declared order:
/// a tombstone removes any entry with a matching id (no-op if absent), an id
/// match replaces in place, and a novel id appends. Shadowing is keyed by id
/// regardless of category, so a category reassignment still replaces the
/// original entry rather than duplicating it. The final sort is stable, so
/// items with equal or absent `order` keep their relative input order.
pub fn merge(base: &Catalog, overlay: &Overlay) -> Vec<MenuItem> {
    let mut merged: Vec<MenuItem> = base.items().to_vec();

    for (_category, entries) in overlay.categories() {
        for entry in entries {
            if entry.deleted {
                merged.retain(|item| item.id != entry.id);
            } else if let Some(slot) = merged.iter_mut().find(|item| item.id == entry.id) {
                *slot = entry.clone();
            } else {
                merged.push(entry.clone());
            }
        }
    }

    merged.sort_by_key(|item| item.order.unwrap_or(ORDER_SENTINEL));
    merged
}

/// Display filter handed in by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl MenuFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    pub fn by_search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }
}

pub fn filter_by_category(items: &[MenuItem], category: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

/// Case-insensitive substring match anywhere in the item name.
pub fn filter_by_search(items: &[MenuItem], term: &str) -> Vec<MenuItem> {
    let needle = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply a display filter. A non-empty search term takes precedence over the
/// category filter.
pub fn filter_menu(items: &[MenuItem], filter: &MenuFilter) -> Vec<MenuItem> {
    if let Some(term) = filter.search.as_deref() {
        if !term.trim().is_empty() {
            return filter_by_search(items, term);
        }
    }
    match filter.category.as_deref() {
        Some(category) => filter_by_category(items, category),
        None => items.to_vec(),
    }
}
