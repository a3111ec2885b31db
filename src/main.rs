//! Lookup Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod confirm;
mod context;
mod forms;
mod logging;
mod lookup;
mod models;
mod reorder;
mod status;
mod store;
mod sync;

use app::App;
use api::RestClient;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);

    let origin = window().location().origin().unwrap_or_default();
    let api = RestClient::new(config.api_url(&origin));
    log::info!("[APP] Starting, API at {}", api.base_url());

    mount_to_body(move || view! { <App config=config.clone() api=api.clone() /> });
}
