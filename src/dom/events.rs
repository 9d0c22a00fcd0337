// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye
//   (p.ej. con set_inner_html("")), el navegador limpia los listeners
//   asociados, así que closure.forget() es seguro para listeners locales.
// - Para listeners globales (document): registrarlos UNA sola vez al inicio
//   de la app; si se registran varias veces se acumulan.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent, SubmitEvent};

/// Click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // closure.forget() mantiene el closure vivo mientras viva el elemento
    closure.forget();
    Ok(())
}

/// Submit handler para formularios
pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(SubmitEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(SubmitEvent)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Keydown global sobre el documento (registrar solo una vez)
pub fn on_document_keydown<F>(document: &Document, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
