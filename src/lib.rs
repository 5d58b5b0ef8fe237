pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;
pub mod web;

/// WASM entry point: installs console logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    common::logging::init(config.log_level);
    log::info!("Starting booking client against {}", config.api_base);
    leptos::mount::mount_to_body(frontend::App);
}
