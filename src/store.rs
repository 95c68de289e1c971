//! Browser-scoped key-value persistence seam.
//!
//! The core never touches storage globals directly; hosts inject a
//! [`LocalStore`] (a `localStorage` binding in the browser, [`MemoryStore`]
//! in tests and native hosts). Access is synchronous and each `set` replaces
//! one whole serialized value, so there are no partial writes to observe.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the serialized admin overlay.
pub const OVERLAY_KEY: &str = "admin_menu_overlay";

/// Key gating the admin screens. This is a cosmetic flag, not a security
/// boundary: anyone with access to the store can set it.
pub const ADMIN_LOGIN_KEY: &str = "admin_logged_in";

/// Synchronous key-value byte storage scoped to the host.
pub trait LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store for tests and hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Whether the cosmetic admin gate is currently set.
pub fn is_admin_logged_in(store: &dyn LocalStore) -> bool {
    matches!(store.get(ADMIN_LOGIN_KEY), Ok(Some(value)) if value == "true")
}

/// Set or clear the cosmetic admin gate.
pub fn set_admin_logged_in(store: &dyn LocalStore, logged_in: bool) -> Result<()> {
    if logged_in {
        store.set(ADMIN_LOGIN_KEY, "true")
    } else {
        store.remove(ADMIN_LOGIN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn login_flag_round_trips() {
        let store = MemoryStore::new();
        assert!(!is_admin_logged_in(&store));

        set_admin_logged_in(&store, true).unwrap();
        assert!(is_admin_logged_in(&store));

        set_admin_logged_in(&store, false).unwrap();
        assert!(!is_admin_logged_in(&store));
        assert_eq!(store.get(ADMIN_LOGIN_KEY).unwrap(), None);
    }
}
