// ============================================================================
// CONFIRM MODAL - Confirmación de eliminación
// ============================================================================
// El diálogo se cierra apenas se confirma, antes de que resuelva la red:
// el resultado llega por toast y por la recarga de la lista, nunca dejando
// el diálogo colgado esperando al backend.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    add_class, append_child, body, get_element_by_id, on_click, remove_class, set_text_content,
    ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::ProductsViewModel;
use crate::views::products_page::refresh_products;
use crate::views::toast::{show_toast, ToastKind};

const MODAL_ID: &str = "modal-confirm-delete";
const NAME_ID: &str = "confirm-product-name";

/// Renderizar el modal de confirmación (oculto hasta que se pida una baja)
pub fn render_confirm_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?.id(MODAL_ID)?.class("modal").build();

    let overlay = ElementBuilder::new("div")?
        .class("modal-overlay")
        .attr("data-close", "true")?
        .build();
    {
        let state = state.clone();
        on_click(&overlay, move |_| close_delete_confirm(&state))?;
    }

    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h2")?.text("Eliminar producto").build();
    let btn_close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .id("btn-close-confirm")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&btn_close, move |_| close_delete_confirm(&state))?;
    }
    append_child(&header, &title)?;
    append_child(&header, &btn_close)?;

    let texto = ElementBuilder::new("p")?.build();
    set_text_content(&texto, "¿Seguro que quieres eliminar ");
    let nombre = ElementBuilder::new("strong")?.id(NAME_ID)?.build();
    let cierre = ElementBuilder::new("span")?.text(" y sus items asociados?").build();
    append_child(&texto, &nombre)?;
    append_child(&texto, &cierre)?;

    let footer = ElementBuilder::new("div")?.class("modal-footer").build();
    let btn_cancel = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Cancelar")
        .build();
    {
        let state = state.clone();
        on_click(&btn_cancel, move |_| close_delete_confirm(&state))?;
    }
    let btn_confirm = ElementBuilder::new("button")?
        .attr("type", "button")?
        .id("btn-confirm-delete")?
        .class("btn-danger")
        .text("Eliminar")
        .build();
    {
        let state = state.clone();
        on_click(&btn_confirm, move |_| confirm_delete(&state))?;
    }
    append_child(&footer, &btn_cancel)?;
    append_child(&footer, &btn_confirm)?;

    append_child(&content, &header)?;
    append_child(&content, &texto)?;
    append_child(&content, &footer)?;
    append_child(&modal, &overlay)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Abrir el diálogo para un producto concreto
pub fn open_delete_confirm(state: &AppState, id: i64, nombre: String) {
    if let Some(span) = get_element_by_id(NAME_ID) {
        set_text_content(&span, &format!("\"{}\"", nombre));
    }
    state.request_delete(id, nombre);

    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let _ = add_class(&modal, "is-open");
    }
    if let Some(body) = body() {
        let _ = body.class_list().add_1("modal-open");
    }
}

/// Cerrar sin eliminar (cancelar, fondo o Escape)
pub fn close_delete_confirm(state: &AppState) {
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let _ = remove_class(&modal, "is-open");
    }
    if let Some(body) = body() {
        let _ = body.class_list().remove_1("modal-open");
    }
    state.cancel_delete();
}

/// Confirmar: consumir el pendiente, cerrar ya mismo y recién ahí llamar al
/// backend. Confirmar sin pendiente solo cierra.
fn confirm_delete(state: &AppState) {
    let pendiente = state.take_pending_delete();
    close_delete_confirm(state);

    let Some(pendiente) = pendiente else { return };

    let state = state.clone();
    spawn_local(async move {
        match ProductsViewModel::new()
            .delete_product(pendiente.id, &pendiente.nombre)
            .await
        {
            Ok(mensaje) => {
                show_toast(&mensaje, ToastKind::Success);
                refresh_products(&state);
            }
            Err(e) => {
                log::error!("❌ Eliminar producto: {}", e);
                show_toast(&format!("Error eliminando producto: {}", e), ToastKind::Error);
            }
        }
    });
}
