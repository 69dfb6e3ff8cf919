// ============================================================================
// GALLERY CONSOLE - Admin data-sync layer for galleries, collections, photos
// ============================================================================
// Layout:
// - Services: backend communication only (transport + per-entity calls)
// - State: entity slices with Rc<RefCell> stores, upload staging
// - ViewModels: form validation + operation lifecycle per entity
// - Views: functions that render DOM from slice state (no logic)
// - Models: shapes shared with the backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
pub mod dom;
pub mod views;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Keeps the mounted app (and its stores) alive for the page lifetime
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    use crate::config::CONFIG;

    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Gallery console ({}) -> {}", CONFIG.environment.as_str(), CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Reloads the gallery table (callable from JavaScript)
#[wasm_bindgen]
pub fn refresh_galleries() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            let galleries = app.galleries.clone();
            state::task::spawn(services::OperationKind::ListAll, async move {
                galleries.list_all().await
            });
        } else {
            log::warn!("⚠️ App not initialized");
        }
    });
}
