// ============================================================================
// TOAST - Notificaciones no bloqueantes
// ============================================================================
// Única capacidad de aviso al usuario: las demás vistas solo llaman a
// show_toast(mensaje, tipo). Se apilan arriba a la derecha y se descartan
// solas a los 3,5 segundos o con el botón de cierre.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, body, get_element_by_id, on_click, ElementBuilder};

const CONTAINER_ID: &str = "toast-container";
const AUTO_DISMISS_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Muestra una notificación; un fallo del DOM solo se registra en consola
pub fn show_toast(message: &str, kind: ToastKind) {
    if let Err(e) = try_show_toast(message, kind) {
        log::warn!("⚠️ No se pudo mostrar el toast: {:?}", e);
    }
}

fn try_show_toast(message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let container = ensure_container()?;

    let toast = ElementBuilder::new("div")?.class(kind.class()).build();

    let text = ElementBuilder::new("div")?
        .class("toast-text")
        .text(message)
        .build();

    let btn_close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let toast = toast.clone();
        on_click(&btn_close, move |_| toast.remove())?;
    }

    append_child(&toast, &text)?;
    append_child(&toast, &btn_close)?;
    append_child(&container, &toast)?;

    // auto-descarte; si ya lo cerraron a mano no hay nada que hacer
    let toast_clone = toast.clone();
    Timeout::new(AUTO_DISMISS_MS, move || {
        if toast_clone.is_connected() {
            toast_clone.remove();
        }
    })
    .forget();

    Ok(())
}

/// El contenedor se crea perezosamente la primera vez que hace falta
fn ensure_container() -> Result<Element, JsValue> {
    if let Some(container) = get_element_by_id(CONTAINER_ID) {
        return Ok(container);
    }
    let container = ElementBuilder::new("div")?.id(CONTAINER_ID)?.build();
    if let Some(body) = body() {
        body.append_child(&container)?;
    }
    Ok(container)
}
