// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::views::render_app;
use crate::views::products_page::refresh_products;

/// Aplicación principal: es dueña del estado y del elemento raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;
        Ok(Self {
            state: AppState::new(),
            root,
        })
    }

    /// Render completo de la pantalla actual (login o productos).
    /// Las actualizaciones chicas (tabla, modales, toasts) tocan el DOM
    /// directamente; esto solo corre al arrancar y al cambiar de pantalla.
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        if self.state.is_logged_in() {
            // carga inicial de la lista apenas aparece la tabla
            refresh_products(&self.state);
        }
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
