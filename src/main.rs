//! Card Catalog Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logging;
mod models;
mod render;
mod repository;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
