// ============================================================================
// SMART CONDOMINIUM - FRONTEND YEW (RUST/WASM)
// ============================================================================
// - Views: páginas (dashboard, cuotas, unidades, reservas, reportes)
// - Components: modales, toasts, tarjetas, skeletons
// - Hooks: patrón de carga (use_resource), mutaciones, identidad, debounce
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend + lógica pura de formularios
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

use crate::app::{App, AppProps};
use crate::config::AppConfig;

/// Punto de entrada: panic hook, logging y montaje de la app
pub fn run() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Smart Condominium starting...");
    log::info!("🌐 API: {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
