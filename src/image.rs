//! Image source resolution for menu items.

/// Default placeholder shown for items without a usable image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Resolves an item's `image` field to a displayable URI.
///
/// Embedded (`data:`) and external (`http...`) sources pass through
/// untouched; anything else is treated as a file name under the local asset
/// catalog. Missing images resolve to the placeholder rather than failing
/// the render.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    asset_base: String,
    placeholder: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new("assets/menu")
    }
}

impl ImageResolver {
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
            placeholder: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn resolve(&self, image: Option<&str>) -> String {
        let image = match image {
            Some(image) if !image.trim().is_empty() => image,
            _ => return self.placeholder.clone(),
        };
        if image.starts_with("data:") || image.starts_with("http") {
            return image.to_string();
        }
        format!("{}/{}", self.asset_base.trim_end_matches('/'), image)
    }
}
