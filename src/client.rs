//! Read-side facade for merge-consuming views.

use crate::item::{Catalog, MenuItem};
use crate::merge::{filter_menu, merge, MenuFilter};
use crate::overlay::Overlay;
use crate::store::LocalStore;
use std::rc::Rc;

/// Read client over the base catalog and the persisted overlay.
///
/// Every call re-reads the overlay from the store and re-runs the merge, so
/// views never hold derived state that can go stale. The merge is bounded by
/// catalog size; recomputing beats caching here.
pub struct MenuClient {
    catalog: Rc<Catalog>,
    store: Rc<dyn LocalStore>,
}

impl MenuClient {
    pub fn new(catalog: Rc<Catalog>, store: Rc<dyn LocalStore>) -> Self {
        Self { catalog, store }
    }

    /// The full merged, deterministically ordered menu.
    pub fn merged_menu(&self) -> Vec<MenuItem> {
        let overlay = Overlay::load(self.store.as_ref());
        merge(&self.catalog, &overlay)
    }

    /// The merged menu narrowed by a display filter.
    pub fn filtered(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        filter_menu(&self.merged_menu(), filter)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
