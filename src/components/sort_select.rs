use leptos::prelude::*;

use crate::context::use_catalog_context;
use crate::filter::{SortSpec, SORT_OPTIONS};

/// Sort selector; the empty option keeps fetch order
#[component]
pub fn SortSelect() -> impl IntoView {
    let ctx = use_catalog_context();

    view! {
        <select
            id="sortSelect"
            class="form-select"
            prop:value=move || ctx.sort.get().map(|s| s.value()).unwrap_or_default()
            on:change=move |ev| ctx.set_sort(SortSpec::parse(&event_target_value(&ev)))
        >
            {SORT_OPTIONS
                .iter()
                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                .collect_view()}
        </select>
    }
}
