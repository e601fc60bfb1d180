//! Catalog Configuration
//!
//! Compiled-in settings, read once by the root component.

/// Where the catalog document lives and where the theme preference is kept
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Page-relative URL of the JSON item list
    pub data_url: String,
    /// localStorage key holding "dark" or "light"
    pub theme_key: String,
}

pub const DEFAULT_DATA_URL: &str = "data/items.json";
pub const DEFAULT_THEME_KEY: &str = "theme";

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}
