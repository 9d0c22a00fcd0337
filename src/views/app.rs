// ============================================================================
// APP VIEW - Raíz de la interfaz
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::views::login::render_login;
use crate::views::products_page::render_products_page;

/// Renderizar la pantalla que corresponde al estado actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.is_logged_in() {
        render_products_page(state)
    } else {
        render_login(state)
    }
}
