//! Filter/Sort Engine
//!
//! Derives the display sequence from the fetched items. Never touches the
//! base sequence.

use std::cmp::Ordering;

use crate::models::Item;

/// Field a sort can key on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
        }
    }

    fn key<'a>(&self, item: &'a Item) -> &'a str {
        match self {
            SortField::Title => &item.title,
            SortField::Author => &item.author,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A (field, direction) sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a sort control value such as `title-asc`.
    /// Empty or unrecognized values mean "keep fetch order".
    pub fn parse(value: &str) -> Option<Self> {
        let (field, direction) = value.split_once('-')?;
        let field = match field {
            "title" => SortField::Title,
            "author" => SortField::Author,
            _ => return None,
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return None,
        };
        Some(Self::new(field, direction))
    }

    /// Value used by the sort control
    pub fn value(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.direction.as_str())
    }
}

/// Options offered by the sort control, in display order
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "Sort by..."),
    ("title-asc", "Title (A-Z)"),
    ("title-desc", "Title (Z-A)"),
    ("author-asc", "Author (A-Z)"),
    ("author-desc", "Author (Z-A)"),
];

/// Substring match on title or author; `lowered` is already lowercase
fn matches_lowered(item: &Item, lowered: &str) -> bool {
    item.title.to_lowercase().contains(lowered) || item.author.to_lowercase().contains(lowered)
}

/// Filter by `query`, then stable-sort by `sort` if given.
pub fn apply(items: &[Item], query: &str, sort: Option<SortSpec>) -> Vec<Item> {
    let query = query.to_lowercase();
    let mut result: Vec<Item> = items
        .iter()
        .filter(|item| matches_lowered(item, &query))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        result.sort_by(|a, b| {
            let a_key = spec.field.key(a).to_lowercase();
            let b_key = spec.field.key(b).to_lowercase();
            match spec.direction {
                SortDirection::Ascending => compare_keys(&a_key, &b_key),
                SortDirection::Descending => compare_keys(&b_key, &a_key),
            }
        });
    }

    result
}

/// Locale-aware comparison through the browser's collator
#[cfg(target_arch = "wasm32")]
fn compare_keys(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Root-collation approximation: accents are ignored first, then break ties
#[cfg(not(target_arch = "wasm32"))]
fn compare_keys(a: &str, b: &str) -> Ordering {
    base_letters(a).cmp(&base_letters(b)).then_with(|| a.cmp(b))
}

/// Strip combining marks after canonical decomposition ("é" -> "e")
#[cfg(not(target_arch = "wasm32"))]
fn base_letters(s: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
