// ============================================================================
// HBNB WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Controladores de formularios (login / review)
// - Services: Comunicación API + sesión (cookie token)
// - Models: Estructuras compartidas con el backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod utils;
mod viewmodels;
mod views;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 HBnB Web - Rust puro + MVVM");

    // Todas las páginas comparten el mismo bundle; App decide qué
    // controladores activar según los elementos presentes en el DOM.
    App::new().run()
}
