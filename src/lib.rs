// ============================================================================
// BLOGLIST FRONTEND - Yew + WASM
// ============================================================================
// - models:     wire types shared with the REST API
// - services:   HTTP client, token decoding, session persistence
// - state:      plain state types (blog list, notification)
// - hooks:      orchestration; calls services, mutates state, notifies
// - components: views that read state and raise callbacks
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;

pub use components::App;
pub use error::{ApiError, SessionError, StorageError};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("📚 Bloglist starting (backend: {:?})", CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
