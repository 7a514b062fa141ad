//! Recipe Book Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod form;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = AppConfig::load();
    logging::set_level(config.level_filter());
    log::info!("[APP] starting {:?}", config.title);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
