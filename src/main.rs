//! FelixPets Frontend Entry Point

mod app;
mod components;
mod context;
mod services;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    // Panic message first, then the log lines that led up to it
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let report = rolling_logger::recent_report();
        if !report.is_empty() {
            web_sys::console::error_1(&report.into());
        }
    }));
    if let Err(e) = rolling_logger::init(LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
