//! Item Repository
//!
//! One fetch of the catalog document per page load. No retries.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{CatalogError, CatalogResult};
use crate::logging;
use crate::models::{parse_items, Item};

/// Fetch and parse the item list at `url`, in document order
pub async fn load(url: &str) -> CatalogResult<Vec<Item>> {
    let body = fetch_text(url).await?;
    let items = parse_items(&body).inspect_err(|e| {
        logging::error(&format!("[REPO] Invalid document at {}: {}", url, e.detail()));
    })?;
    logging::log(&format!("[REPO] Loaded {} items", items.len()));
    Ok(items)
}

/// GET `url` and read the body as text. Network failures, non-2xx statuses
/// and unreadable bodies are all `CatalogError::Fetch`.
async fn fetch_text(url: &str) -> CatalogResult<String> {
    let window = web_sys::window().ok_or_else(|| CatalogError::fetch("no window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_failed(url, e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_failed(url, e))?;
    let response: Response = response.dyn_into().map_err(|e| fetch_failed(url, e))?;

    if !response.ok() {
        let detail = format!("HTTP {} for {}", response.status(), url);
        logging::error(&format!("[REPO] {}", detail));
        return Err(CatalogError::fetch(detail));
    }

    let text = response.text().map_err(|e| fetch_failed(url, e))?;
    let text = JsFuture::from(text).await.map_err(|e| fetch_failed(url, e))?;
    text.as_string()
        .ok_or_else(|| fetch_failed(url, "response body is not text"))
}

fn fetch_failed(url: &str, err: impl std::fmt::Debug) -> CatalogError {
    let detail = format!("{} unreachable: {:?}", url, err);
    logging::error(&format!("[REPO] {}", detail));
    CatalogError::fetch(detail)
}
