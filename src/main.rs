//! SSD Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod feedback;
mod models;
mod pages;
mod pagination;
mod routes;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
