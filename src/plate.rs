//! Plate aggregator: the user's in-session selection with calorie totals.
//!
//! Plates live in memory for a browsing session and are never persisted.
//! Totals are recomputed from the entries on every call rather than cached,
//! so they can never drift out of sync with the selection.

use crate::item::MenuItem;

/// Daily calorie goal used when the user has not picked one.
pub const DEFAULT_GOAL: f64 = 2000.0;

/// One selected item with its quantity. At most one entry per item id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateEntry {
    pub item: MenuItem,
    pub qty: u32,
}

/// Multiset of selected items tracked against a calorie goal.
#[derive(Debug, Clone)]
pub struct Plate {
    entries: Vec<PlateEntry>,
    goal: f64,
}

impl Default for Plate {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL)
    }
}

impl Plate {
    pub fn new(goal: f64) -> Self {
        Self {
            entries: Vec::new(),
            goal,
        }
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn set_goal(&mut self, goal: f64) {
        self.goal = goal;
    }

    /// Entries in insertion order (display order only, not semantic).
    pub fn entries(&self) -> &[PlateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one serving; a repeat add bumps the existing entry's quantity.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.qty += 1;
        } else {
            self.entries.push(PlateEntry {
                item: item.clone(),
                qty: 1,
            });
        }
    }

    /// Remove the entry entirely, regardless of quantity.
    pub fn remove_item(&mut self, id: &str) {
        self.entries.retain(|e| e.item.id != id);
    }

    /// Adjust quantity by `delta`. A result at or below zero removes the
    /// entry; an unknown id is a no-op.
    pub fn change_qty(&mut self, id: &str, delta: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == id) {
            let qty = i64::from(entry.qty) + i64::from(delta);
            if qty <= 0 {
                self.remove_item(id);
            } else {
                entry.qty = qty as u32;
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total calories across the plate.
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.item.calories * f64::from(e.qty))
            .sum()
    }

    /// Progress toward the goal as a percentage, clamped to 100 for the
    /// progress indicator.
    pub fn percent_of_goal(&self) -> f64 {
        if self.goal <= 0.0 {
            return if self.total() > 0.0 { 100.0 } else { 0.0 };
        }
        (self.total() / self.goal * 100.0).min(100.0)
    }

    pub fn is_over_goal(&self) -> bool {
        self.total() > self.goal
    }

    /// Calories past the goal; zero while within it.
    pub fn overage(&self) -> f64 {
        (self.total() - self.goal).max(0.0)
    }
}
