// ============================================================================
// TOTEM DASHBOARD - PANEL DE VENDEDOR (RUST PURO + WASM)
// ============================================================================
// Arquitectura de flujo unidireccional:
// - Views: proyecciones puras del estado + builders DOM por región
// - ViewModels: Intent → llamadas API → mutación de estado → regiones sucias
// - Services: gateway REST, plataforma del navegador, toasts
// - State: DashboardState explícito en Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::viewmodels::Intent;

// Instancia global de App (un solo dashboard por página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Totem Dashboard - backend: '{}'", CONFIG.backend_url);

    let mut app = App::new(&CONFIG)?;
    app.mount()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    dispatch(Intent::Start);
    Ok(())
}

/// Punto de entrada de todos los eventos de la UI
pub(crate) fn dispatch(intent: Intent) {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.dispatch(intent),
        None => web_sys::console::warn_1(&JsValue::from_str("⚠️ [DISPATCH] App no está inicializada")),
    });
}
