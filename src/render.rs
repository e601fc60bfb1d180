//! View Renderer (planning)
//!
//! Decides what the card region and the message region show. Components
//! draw the result; every change replaces both regions wholesale.

use crate::error::CatalogError;
use crate::models::Item;
use crate::store::LoadState;

/// Inline style for the text shown in place of an image that failed to load
pub const IMAGE_PLACEHOLDER_STYLE: &str = "display: flex; justify-content: center; align-items: center; \
    height: 200px; background-color: #ddd; color: #333; font-weight: bold; text-align: center; padding: 1rem;";

/// Contents of the card and message regions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rendered {
    pub cards: Vec<Item>,
    pub message: Option<String>,
}

/// Plan the view for `items` given the load state.
///
/// `filtered_since_load` is true once the user has changed the query or sort
/// after the load settled (or while it is still pending). Until then a
/// pending load shows nothing and a failed load shows its own message;
/// afterwards every pass shows cards or "No items found.".
pub fn render(state: &LoadState, items: Vec<Item>, filtered_since_load: bool) -> Rendered {
    match state {
        LoadState::Loading if !filtered_since_load => Rendered::default(),
        LoadState::Failed(e) if !filtered_since_load => Rendered {
            cards: Vec::new(),
            message: Some(e.to_string()),
        },
        _ if items.is_empty() => Rendered {
            cards: Vec::new(),
            message: Some(CatalogError::Empty.to_string()),
        },
        _ => Rendered {
            cards: items,
            message: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_item;

    #[test]
    fn test_empty_sequence_shows_only_message() {
        let out = render(&LoadState::Loaded, Vec::new(), false);
        assert!(out.cards.is_empty());
        assert_eq!(out.message.as_deref(), Some("No items found."));
    }

    #[test]
    fn test_cards_in_order_without_message() {
        let items = vec![make_item("B", "x"), make_item("A", "y")];
        let out = render(&LoadState::Loaded, items.clone(), false);
        assert_eq!(out.cards, items);
        assert_eq!(out.message, None);
    }

    #[test]
    fn test_fetch_failure_shows_message_and_no_cards() {
        let state = LoadState::Failed(CatalogError::fetch("HTTP 500"));
        let out = render(&state, Vec::new(), false);
        assert!(out.cards.is_empty());
        assert_eq!(out.message.as_deref(), Some("Failed to fetch items."));
    }

    #[test]
    fn test_parse_failure_message() {
        let state = LoadState::Failed(CatalogError::parse("expected value"));
        assert_eq!(render(&state, Vec::new(), false).message.as_deref(), Some("Failed to parse items."));
    }

    #[test]
    fn test_loading_shows_nothing() {
        assert_eq!(render(&LoadState::Loading, Vec::new(), false), Rendered::default());
    }

    #[test]
    fn test_filter_after_failed_load_replaces_error() {
        let state = LoadState::Failed(CatalogError::fetch("HTTP 500"));
        let out = render(&state, Vec::new(), true);
        assert!(out.cards.is_empty());
        assert_eq!(out.message.as_deref(), Some("No items found."));
    }

    #[test]
    fn test_filter_while_loading_shows_empty_message() {
        let out = render(&LoadState::Loading, Vec::new(), true);
        assert!(out.cards.is_empty());
        assert_eq!(out.message.as_deref(), Some("No items found."));
    }

    #[test]
    fn test_loaded_ignores_filter_flag() {
        let items = vec![make_item("A", "x")];
        assert_eq!(render(&LoadState::Loaded, items.clone(), true), render(&LoadState::Loaded, items, false));
    }
}
