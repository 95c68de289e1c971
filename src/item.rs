//! Menu item records and the immutable base catalog.

use serde::{Deserialize, Serialize};

/// A single menu entry as it appears in the merged catalog.
///
/// Field names mirror the persisted JSON records (`isBase`), so overlay blobs
/// written by earlier versions of the admin screen deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique within the merged catalog. Base items get `base-<index>`,
    /// admin-created items get a fresh time-based id.
    #[serde(default)]
    pub id: String,
    pub category: String,
    pub name: String,
    pub calories: f64,
    /// Absent, an embedded `data:` image, an external URL, or a file name
    /// resolved against the local asset catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Manual position within the merged menu; absent sorts last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// True iff sourced from the base catalog and not yet overridden.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_base: bool,
    /// Tombstone flag: suppresses the shadowed base entry from merged views.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MenuItem {
    /// Convenience constructor for an item with no image or manual order.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            calories,
            image: None,
            order: None,
            is_base: false,
            deleted: false,
        }
    }
}

/// The immutable base catalog, loaded once at startup and never mutated.
///
/// Construction assigns a stable synthetic id (`base-<index>`) to every entry
/// that ships without one, so the merge can key overrides by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        for (index, item) in items.iter_mut().enumerate() {
            if item.id.is_empty() {
                item.id = format!("base-{index}");
            }
            item.is_base = true;
            item.deleted = false;
        }
        Self { items }
    }

    /// Parse a compiled-in JSON array of menu records.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_assigns_synthetic_ids_by_position() {
        let catalog = Catalog::new(vec![
            MenuItem::new("", "A", "Wing", 300.0),
            MenuItem::new("", "A", "Rice", 500.0),
        ]);

        assert_eq!(catalog.items()[0].id, "base-0");
        assert_eq!(catalog.items()[1].id, "base-1");
        assert!(catalog.items().iter().all(|item| item.is_base));
    }

    #[test]
    fn catalog_keeps_explicit_ids() {
        let catalog = Catalog::new(vec![MenuItem::new("wing-1", "A", "Wing", 300.0)]);
        assert_eq!(catalog.items()[0].id, "wing-1");
        assert!(catalog.find("wing-1").is_some());
    }

    #[test]
    fn item_json_uses_stored_field_names() {
        let mut item = MenuItem::new("base-0", "Beef", "Bulgogi", 650.0);
        item.is_base = true;

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"isBase\":true"));
        assert!(!json.contains("deleted"));

        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn catalog_parses_records_without_ids() {
        let catalog =
            Catalog::from_json(r#"[{"category":"Sides","name":"Coleslaw","calories":150}]"#)
                .unwrap();
        assert_eq!(catalog.items()[0].id, "base-0");
        assert_eq!(catalog.items()[0].calories, 150.0);
    }
}
