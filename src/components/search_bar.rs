use leptos::prelude::*;

use crate::context::use_catalog_context;

/// Search box: every keystroke updates the query
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_catalog_context();

    view! {
        <input
            id="searchInput"
            type="search"
            class="form-control"
            placeholder="Search by title or author..."
            prop:value=move || ctx.query.get()
            on:input=move |ev| ctx.set_query(event_target_value(&ev))
        />
    }
}
