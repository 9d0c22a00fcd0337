// ============================================================================
// FARMACIA TS - PANEL DE ADMINISTRACIÓN (RUST PURO, MVVM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: validación + operaciones contra el backend
// - Services: comunicación HTTP, almacenamiento y caché
// - State: estado explícito con Rc<RefCell>, dueño: App
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de la app; solo se toca desde el hilo de UI
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("💊 Farmacia TS - Panel de administración");

    let mut app = App::new()?;
    app.render()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global de Escape: cierra cualquier modal abierto.
    // Se registra UNA sola vez acá; registrarlo de nuevo lo duplicaría
    // (ver la nota en dom/events.rs).
    if let Some(document) = dom::document() {
        dom::on_document_keydown(&document, |e| {
            if e.key() == "Escape" {
                APP.with(|cell| {
                    if let Some(app) = cell.borrow().as_ref() {
                        let state = app.state();
                        if state.form_session.borrow().is_open() {
                            views::product_modal::close_form_modal(state);
                        }
                        if state.pending_delete.borrow().is_some() {
                            views::confirm_modal::close_delete_confirm(state);
                        }
                    }
                });
            }
        })?;
    }

    Ok(())
}

/// Re-render completo (cambio de pantalla: login ↔ productos)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando la app: {:?}", e);
            }
        }
    });
}
