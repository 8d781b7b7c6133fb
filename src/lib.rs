// ============================================================================
// REGISTRO DE EMPRESAS - FRONTEND (RUST + YEW)
// ============================================================================
// Alta de empresa -> alta de usuarios de esa empresa -> login
// - Services: SOLO comunicación API (transporte inyectable)
// - State: stores persistidos en localStorage con Rc<RefCell>
// - ViewModels: validación + envío + avisos
// - Components: pantallas yew (solo renderizan)
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Registro de Empresas - Rust + Yew");
    log::debug!("🌐 API: {}", CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
    Ok(())
}
