//! UI Components
//!
//! Leptos components for the catalog page.

mod card_list;
mod item_card;
mod search_bar;
mod sort_select;
mod theme_toggle;

pub use card_list::CardList;
pub use item_card::ItemCard;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
pub use theme_toggle::ThemeToggle;
