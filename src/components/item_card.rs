//! Item Card Component
//!
//! One catalog entry. A broken image is swapped for its title in place.

use leptos::prelude::*;

use crate::models::Item;
use crate::render::IMAGE_PLACEHOLDER_STYLE;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let Item { title, author, description, image } = item;
    let (image_failed, set_image_failed) = signal(false);

    let image_region = {
        let title = title.clone();
        move || {
            if image_failed.get() {
                view! {
                    <div class="image-placeholder" style=IMAGE_PLACEHOLDER_STYLE>{title.clone()}</div>
                }.into_any()
            } else {
                view! {
                    <img
                        src=image.clone()
                        alt=title.clone()
                        on:error=move |_| set_image_failed.set(true)
                    />
                }.into_any()
            }
        }
    };

    view! {
        <div class="col">
            <article class="card-custom h-100">
                <div class="card-img-container">{image_region}</div>
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{title}</h5>
                    <h6 class="card-subtitle mb-2">
                        <span class="badge-author">{author}</span>
                    </h6>
                    <p class="card-text">{description}</p>
                </div>
            </article>
        </div>
    }
}
