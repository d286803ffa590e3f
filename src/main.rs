#![allow(warnings)]
//! Inventory Frontend Entry Point

mod models;
mod form;
mod filter;
mod api;
mod store;
mod manager;
mod context;
mod config;
mod logger;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ClientConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };
    logger::init(config.level_filter());
    if let Some(err) = config_error {
        log::warn!("ignoring malformed inventory config: {}", err);
    }
    log::info!("inventory client using {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
