//! Resume Parser Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod export;
mod config;
mod logging;
mod js_error;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, issue) = config::load();
    logging::init(&config.log_level);
    if let Some(e) = issue {
        tracing::warn!(error = %e, "設定の読み込みに失敗したためデフォルト値を使用します");
    }
    tracing::info!(endpoint = %config.endpoint, "起動");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
