//! Card List Component
//!
//! Message region plus card grid, both rebuilt from scratch whenever the
//! visible sequence, load state or filter inputs change.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_catalog_context;
use crate::models::Item;
use crate::render::render;
use crate::store::{filtered_since_load, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn CardList(visible: Memo<Vec<Item>>) -> impl IntoView {
    let store = use_catalog_store();
    let ctx = use_catalog_context();
    let rendered = Memo::new(move |_| {
        let filtered = filtered_since_load(ctx.filter_passes.get(), store.settled_at_pass().get());
        render(&store.load_state().get(), visible.get(), filtered)
    });

    view! {
        <div id="errorContainer" class="error-message text-center my-3">
            {move || rendered.get().message.unwrap_or_default()}
        </div>
        <div id="cardsContainer" class="row row-cols-1 row-cols-sm-2 row-cols-md-3 g-4">
            {move || {
                rendered
                    .get()
                    .cards
                    .into_iter()
                    .map(|item| view! { <ItemCard item=item /> })
                    .collect_view()
            }}
        </div>
    }
}
