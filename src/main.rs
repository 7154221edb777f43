//! Item List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dialogs;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
        config::default_config()
    });
    if let Err(e) = logger::init(config.log_level_filter()) {
        web_sys::console::error_1(&format!("[LOG] {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
