//! Frontend Models
//!
//! The catalog entry as it appears in the JSON document.

use serde::Deserialize;

use crate::error::CatalogResult;

/// One catalog entry. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub title: String,
    pub author: String,
    pub description: String,
    /// URL or path; may fail to load when displayed
    pub image: String,
}

/// Parse the catalog document: a JSON array of items, kept in document order.
/// Unknown fields are ignored, missing required fields are rejected.
pub fn parse_items(body: &str) -> CatalogResult<Vec<Item>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
pub(crate) fn make_item(title: &str, author: &str) -> Item {
    Item {
        title: title.to_string(),
        author: author.to_string(),
        description: format!("About {}", title),
        image: format!("img/{}.png", title.to_lowercase()),
    }
}
