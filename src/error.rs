//! Catalog Errors
//!
//! Every failure the page can show. `Display` is the user-facing message;
//! diagnostic detail goes to the console only.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Document unreachable or answered with a non-success status
    #[error("Failed to fetch items.")]
    Fetch { detail: String },
    /// Document reachable but not a JSON array of items
    #[error("Failed to parse items.")]
    Parse { detail: String },
    /// Nothing left to show
    #[error("No items found.")]
    Empty,
}

impl CatalogError {
    pub fn fetch(detail: impl Into<String>) -> Self {
        CatalogError::Fetch { detail: detail.into() }
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        CatalogError::Parse { detail: detail.into() }
    }

    /// Diagnostic text for logging
    pub fn detail(&self) -> &str {
        match self {
            CatalogError::Fetch { detail } | CatalogError::Parse { detail } => detail,
            CatalogError::Empty => "",
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::parse(e.to_string())
    }
}
