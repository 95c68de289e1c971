//! menu-core — menu reconciliation and plate tracking for a client-side
//! calorie counter.
//!
//! # Architecture
//!
//! An immutable base catalog (compiled into the host) is merged with a
//! mutable, persisted admin overlay into one deterministically ordered menu:
//!
//! - **[`LocalStore`]**: synchronous key-value persistence seam; hosts inject
//!   a browser `localStorage` binding, tests inject [`MemoryStore`].
//! - **[`merge()`]**: combines catalog + overlay; overlay entries shadow base
//!   items by id, tombstones suppress them, novel ids append, and a stable
//!   sort applies manual ordering.
//! - **[`Plate`]**: in-session multiset of selections with calorie totals
//!   derived against a daily goal.
//! - **[`AdminService`]**: add/edit/delete/reorder mutations; each one reads
//!   the overlay, transforms it, persists the whole value, then broadcasts.
//! - **[`ChangeBus`]**: payload-less notification so independent views
//!   re-run the merge after every mutation.
//!
//! Everything runs on one logical thread of control; there is no parallelism
//! and no blocking I/O.
//!
//! # Example
//!
//! ```rust
//! use menu_core::{
//!     AdminService, Catalog, ChangeBus, ItemUpdate, MemoryStore, MenuClient, MenuItem, Plate,
//! };
//! use std::rc::Rc;
//!
//! let catalog = Rc::new(Catalog::new(vec![
//!     MenuItem::new("", "Korean Fried Chicken", "Wing", 300.0),
//! ]));
//! let store = Rc::new(MemoryStore::new());
//! let bus = Rc::new(ChangeBus::new());
//!
//! let menu = MenuClient::new(Rc::clone(&catalog), store.clone());
//! let admin = AdminService::new(Rc::clone(&catalog), store.clone(), Rc::clone(&bus));
//!
//! // Admin edits a base item; the next read reflects it.
//! admin.edit_item(
//!     "base-0",
//!     "Korean Fried Chicken",
//!     &ItemUpdate { calories: Some(350.0), ..Default::default() },
//! )?;
//!
//! let merged = menu.merged_menu();
//! assert_eq!(merged[0].calories, 350.0);
//!
//! let mut plate = Plate::new(1000.0);
//! plate.add_item(&merged[0]);
//! assert_eq!(plate.total(), 350.0);
//! # Ok::<(), menu_core::MenuError>(())
//! ```

// Admin mutation service
pub mod admin;

// Read-side facade
pub mod client;

// Error types
pub mod error;

// Image source resolution
pub mod image;

// Menu item records and the base catalog
pub mod item;

// Catalog merge engine and display filters
pub mod merge;

// Change notification
pub mod notify;

// Persisted admin overlay
pub mod overlay;

// Plate aggregation
pub mod plate;

// Key-value persistence seam
pub mod store;

// Re-export the admin mutation types
pub use admin::{AdminService, CategorySelection, ItemUpdate};

// Re-export the read facade
pub use client::MenuClient;

// Re-export error types
pub use error::{MenuError, Result};

// Re-export image resolution
pub use image::{ImageResolver, PLACEHOLDER_IMAGE};

// Re-export the data model
pub use item::{Catalog, MenuItem};

// Re-export the merge engine
pub use merge::{filter_by_category, filter_by_search, filter_menu, merge, MenuFilter};

// Re-export notification types
pub use notify::{ChangeBus, SubscriptionId};

// Re-export the overlay
pub use overlay::Overlay;

// Re-export plate types
pub use plate::{Plate, PlateEntry, DEFAULT_GOAL};

// Re-export the persistence seam
pub use store::{
    is_admin_logged_in, set_admin_logged_in, LocalStore, MemoryStore, ADMIN_LOGIN_KEY,
    OVERLAY_KEY,
};
