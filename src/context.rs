//! Application Context
//!
//! User-controlled view inputs, provided via the Leptos Context API.
//! Writers stay private; only the event handlers go through the setters.

use leptos::prelude::*;

use crate::filter::SortSpec;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    /// Current search text - read
    pub query: ReadSignal<String>,
    /// Current search text - write
    set_query: WriteSignal<String>,
    /// Current sort, None = fetch order - read
    pub sort: ReadSignal<Option<SortSpec>>,
    /// Current sort, None = fetch order - write
    set_sort: WriteSignal<Option<SortSpec>>,
    /// Query/sort changes made so far - read
    pub filter_passes: ReadSignal<u32>,
    /// Query/sort changes made so far - write
    set_filter_passes: WriteSignal<u32>,
}

impl CatalogContext {
    pub fn new() -> Self {
        let (query, set_query) = signal(String::new());
        let (sort, set_sort) = signal(None::<SortSpec>);
        let (filter_passes, set_filter_passes) = signal(0u32);
        Self {
            query,
            set_query,
            sort,
            set_sort,
            filter_passes,
            set_filter_passes,
        }
    }

    pub fn set_query(&self, query: String) {
        self.set_query.set(query);
        self.set_filter_passes.update(|n| *n += 1);
    }

    pub fn set_sort(&self, sort: Option<SortSpec>) {
        self.set_sort.set(sort);
        self.set_filter_passes.update(|n| *n += 1);
    }
}

pub fn use_catalog_context() -> CatalogContext {
    expect_context::<CatalogContext>()
}
