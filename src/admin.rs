//! Admin mutation service.
//!
//! Every mutation follows the same shape: read the current overlay from the
//! store, apply a pure transform, persist the whole overlay, then broadcast a
//! change. The store write is a single value replace, so subscribers reacting
//! to the broadcast always observe the fully committed overlay. Two admin
//! sessions writing concurrently (e.g. two browser tabs) are last-writer-wins;
//! that limitation is accepted, not solved.

use crate::error::{MenuError, Result};
use crate::item::{Catalog, MenuItem};
use crate::notify::ChangeBus;
use crate::overlay::Overlay;
use crate::store::LocalStore;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Category choice from the add-item form: an existing pick, a newly typed
/// name, or both. A newly typed name wins when both are supplied.
#[derive(Debug, Clone, Default)]
pub struct CategorySelection {
    pub existing: Option<String>,
    pub new_name: Option<String>,
}

impl CategorySelection {
    pub fn existing(name: impl Into<String>) -> Self {
        Self {
            existing: Some(name.into()),
            new_name: None,
        }
    }

    pub fn new_category(name: impl Into<String>) -> Self {
        Self {
            existing: None,
            new_name: Some(name.into()),
        }
    }

    fn resolve(&self) -> Option<String> {
        let pick = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        };
        pick(&self.new_name).or_else(|| pick(&self.existing))
    }
}

/// Field edits applied to an item. `None` carries the current value through.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub image: Option<String>,
}

impl ItemUpdate {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.name.as_deref() {
            if name.trim().is_empty() {
                return Err(MenuError::Validation("item name cannot be empty".into()));
            }
        }
        if let Some(calories) = self.calories {
            if !(calories >= 0.0) {
                return Err(MenuError::Validation(
                    "calories must be a non-negative number".into(),
                ));
            }
        }
        Ok(())
    }

    fn apply(&self, item: &mut MenuItem) {
        if let Some(name) = self.name.as_deref() {
            item.name = name.trim().to_string();
        }
        if let Some(calories) = self.calories {
            item.calories = calories;
        }
        if let Some(image) = self.image.as_deref() {
            item.image = Some(image.to_string());
        }
    }
}

/// Applies admin mutations to the overlay, preserving merge invariants.
pub struct AdminService {
    catalog: Rc<Catalog>,
    store: Rc<dyn LocalStore>,
    bus: Rc<ChangeBus>,
    id_seq: Cell<u64>,
}

impl AdminService {
    pub fn new(catalog: Rc<Catalog>, store: Rc<dyn LocalStore>, bus: Rc<ChangeBus>) -> Self {
        Self {
            catalog,
            store,
            bus,
            id_seq: Cell::new(0),
        }
    }

    /// Create a new item in the resolved category.
    ///
    /// Fails with a validation error before any write when no category
    /// resolves, the name is blank, or the calories are negative.
    pub fn add_item(
        &self,
        selection: &CategorySelection,
        name: &str,
        calories: f64,
        image: Option<String>,
    ) -> Result<MenuItem> {
        let category = selection
            .resolve()
            .ok_or_else(|| MenuError::Validation("select or create a category".into()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::Validation("item name cannot be empty".into()));
        }
        if !(calories >= 0.0) {
            return Err(MenuError::Validation(
                "calories must be a non-negative number".into(),
            ));
        }

        let item = MenuItem {
            id: self.fresh_id(),
            category: category.clone(),
            name: name.to_string(),
            calories,
            image,
            order: None,
            is_base: false,
            deleted: false,
        };

        let mut overlay = Overlay::load(self.store.as_ref());
        overlay.entries_mut(&category).push(item.clone());
        self.commit(&overlay)?;

        debug!(id = %item.id, category = %category, "added menu item");
        Ok(item)
    }

    /// Edit an item by id within a category.
    ///
    /// An existing overlay entry is replaced in place. Editing a pristine
    /// base item for the first time seeds the override from the base record
    /// (image and order carry through) before applying the update.
    pub fn edit_item(&self, id: &str, category: &str, update: &ItemUpdate) -> Result<MenuItem> {
        update.validate()?;

        let mut overlay = Overlay::load(self.store.as_ref());
        let entries = overlay.entries_mut(category);

        let edited = if let Some(slot) = entries.iter_mut().find(|entry| entry.id == id) {
            update.apply(slot);
            slot.is_base = false;
            slot.clone()
        } else {
            let base = self.catalog.find(id).ok_or_else(|| {
                MenuError::Validation(format!("no item with id {id} to edit"))
            })?;
            let mut entry = base.clone();
            entry.category = category.to_string();
            update.apply(&mut entry);
            entry.is_base = false;
            entries.push(entry.clone());
            entry
        };

        self.commit(&overlay)?;
        debug!(id = %id, category = %category, "edited menu item");
        Ok(edited)
    }

    /// Delete an item from its category.
    ///
    /// Any overlay entry with the item's id is dropped; a base-sourced item
    /// additionally gets a tombstone so future merges suppress it. The
    /// confirmation prompt is the caller's concern; this is safe to call
    /// directly.
    pub fn delete_item(&self, item: &MenuItem) -> Result<()> {
        let mut overlay = Overlay::load(self.store.as_ref());
        let entries = overlay.entries_mut(&item.category);
        entries.retain(|entry| entry.id != item.id);

        if item.is_base {
            let mut tombstone = item.clone();
            tombstone.deleted = true;
            entries.push(tombstone);
        }

        self.commit(&overlay)?;
        debug!(id = %item.id, "deleted menu item");
        Ok(())
    }

    /// Rewrite a category's manual ordering from a full id list.
    ///
    /// Each item's `order` becomes its zero-based position. An order override
    /// is itself an admin override, so affected items are marked non-base;
    /// pristine base items gain a shadow entry carrying the new order.
    /// Unknown ids are skipped.
    pub fn reorder(&self, category: &str, new_id_order: &[&str]) -> Result<()> {
        let mut overlay = Overlay::load(self.store.as_ref());
        let entries = overlay.entries_mut(category);

        for (position, id) in new_id_order.iter().enumerate() {
            let order = position as u32;
            if let Some(entry) = entries.iter_mut().find(|entry| entry.id == *id) {
                entry.order = Some(order);
                entry.is_base = false;
            } else if let Some(base) = self.catalog.find(id) {
                let mut entry = base.clone();
                entry.order = Some(order);
                entry.is_base = false;
                entries.push(entry);
            } else {
                debug!(id = %id, "reorder references an unknown id, skipping");
            }
        }

        self.commit(&overlay)?;
        debug!(category = %category, count = new_id_order.len(), "reordered category");
        Ok(())
    }

    /// Persist the whole overlay, then broadcast. The broadcast happens
    /// strictly after the write completes.
    fn commit(&self, overlay: &Overlay) -> Result<()> {
        overlay.save(self.store.as_ref())?;
        self.bus.notify();
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let seq = self.id_seq.get();
        self.id_seq.set(seq + 1);
        format!("item-{}-{}", current_time_ms(), seq)
    }
}

/// Current time in milliseconds.
fn current_time_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::Date;
        Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
