mod app;
mod catalog;
mod clipboard;
mod config;
mod dispatch;
mod filter;
mod keyboard;
mod logging;
mod render;
mod selection;

use app::*;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_errors) = AppConfig::load();
    if let Err(err) = logging::init_logging(&config.log_level) {
        let _ = logging::init_logging("info");
        log::warn!("{err}; logging at info");
    }
    for err in &config_errors {
        log::warn!("{err}");
    }
    log::info!("starting notes browser with {} categories", catalog::CATEGORIES.len());

    mount_to_body(move || {
        view! { <App config=config /> }
    })
}
