//! Card Catalog App
//!
//! Root component: applies the stored theme, starts the one-shot item
//! load and wires the controls to the filter/sort pass.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CardList, SearchBar, SortSelect, ThemeToggle};
use crate::config::CatalogConfig;
use crate::context::CatalogContext;
use crate::filter::apply;
use crate::logging;
use crate::repository;
use crate::store::{store_complete_load, CatalogState, CatalogStateStoreFields};
use crate::theme::{apply_theme, BrowserStorage, ThemeStore};

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();

    // Theme before anything else is drawn
    let mut themes = ThemeStore::new(BrowserStorage, config.theme_key.clone());
    apply_theme(themes.load());
    let theme_store = StoredValue::new(themes);

    // State
    let store = Store::new(CatalogState::default());
    let ctx = CatalogContext::new();
    provide_context(store);
    provide_context(ctx);

    // Single fetch; its completion handler is the only writer of the item set
    let data_url = config.data_url;
    spawn_local(async move {
        logging::log(&format!("[APP] Loading items from {}", data_url));
        let result = repository::load(&data_url).await;
        store_complete_load(&store, result, ctx.filter_passes.get_untracked());
    });

    // Re-derived on every query or sort change
    let visible = Memo::new(move |_| {
        let query = ctx.query.get();
        let sort = ctx.sort.get();
        apply(&store.items().read(), &query, sort)
    });

    view! {
        <div class="container py-4">
            <header class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h3 mb-0">"Catalog"</h1>
                <ThemeToggle theme_store=theme_store />
            </header>

            <div class="row g-2 mb-3">
                <div class="col-md-8">
                    <SearchBar />
                </div>
                <div class="col-md-4">
                    <SortSelect />
                </div>
            </div>

            <CardList visible=visible />
        </div>
    }
}
