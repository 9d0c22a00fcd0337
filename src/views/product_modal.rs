// ============================================================================
// PRODUCT MODAL - Modal de alta/edición de productos
// ============================================================================
// Un solo modal para los dos modos; la sesión (crear o editar qué producto)
// vive en AppState::form_session. En modo edición la fecha de vencimiento
// queda deshabilitada: es inmutable después del alta.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    add_class, append_child, body, get_element_by_id, input_by_id, on_click, on_submit,
    remove_class, select_by_id, set_text_content, ElementBuilder,
};
use crate::state::{AppState, EditTarget};
use crate::viewmodels::products_viewmodel::{validate_create, validate_update, ProductFormInput};
use crate::viewmodels::ProductsViewModel;
use crate::views::category_select::{self, ensure_categories_loaded};
use crate::views::products_page::refresh_products;
use crate::views::toast::{show_toast, ToastKind};

const MODAL_ID: &str = "modal-add";
const TITLE_ID: &str = "modal-title";
const SAVE_BTN_ID: &str = "btn-save";
const FORM_ID: &str = "form-producto";

/// Renderizar el modal (oculto hasta que se abra)
pub fn render_product_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?.id(MODAL_ID)?.class("modal").build();

    // clic en el fondo cierra (marcado con data-close como en el resto de modales)
    let overlay = ElementBuilder::new("div")?
        .class("modal-overlay")
        .attr("data-close", "true")?
        .build();
    {
        let state = state.clone();
        on_click(&overlay, move |_| close_form_modal(&state))?;
    }

    let content = ElementBuilder::new("div")?.class("modal-content").build();

    // header con título según el modo y botón de cierre
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h2")?
        .id(TITLE_ID)?
        .text("Nuevo producto")
        .build();
    let btn_close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .id("btn-close-modal")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&btn_close, move |_| close_form_modal(&state))?;
    }
    append_child(&header, &title)?;
    append_child(&header, &btn_close)?;

    // formulario con los cinco campos
    let form = ElementBuilder::new("form")?.id(FORM_ID)?.build();
    append_child(&form, &field_input("Nombre", "inp-nombre", "text")?)?;
    append_child(&form, &field_select("Categoría", category_select::SELECT_ID)?)?;
    append_child(&form, &field_input("Cantidad", "inp-cantidad", "number")?)?;
    append_child(&form, &field_input("Procedencia", "inp-procedencia", "text")?)?;
    append_child(&form, &field_input("Fecha de vencimiento", "inp-vencimiento", "date")?)?;

    let footer = ElementBuilder::new("div")?.class("modal-footer").build();
    let btn_save = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .id(SAVE_BTN_ID)?
        .class("btn-primary")
        .text("Guardar")
        .build();
    append_child(&footer, &btn_save)?;
    append_child(&form, &footer)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            handle_submit(&state);
        })?;
    }

    append_child(&content, &header)?;
    append_child(&content, &form)?;
    append_child(&modal, &overlay)?;
    append_child(&modal, &content)?;
    Ok(modal)
}

/// Abrir en modo crear: formulario limpio y fecha de vencimiento editable
pub fn open_create(state: &AppState) {
    state.open_create_form();
    reset_form();

    set_label(TITLE_ID, "Nuevo producto");
    set_label(SAVE_BTN_ID, "Guardar");

    if let Some(venc) = input_by_id("inp-vencimiento") {
        venc.set_disabled(false);
        venc.set_value("");
    }

    show_modal();

    let state = state.clone();
    spawn_local(async move {
        ensure_categories_loaded(&state).await;
    });
}

/// Abrir en modo editar: precarga los datos desnormalizados de la fila y
/// deshabilita la fecha de vencimiento
pub fn open_edit(state: &AppState, target: EditTarget) {
    state.open_edit_form(target.clone());

    set_label(TITLE_ID, "Editar producto");
    set_label(SAVE_BTN_ID, "Actualizar");

    if let Some(inp) = input_by_id("inp-nombre") {
        inp.set_value(&target.nombre);
    }
    if let Some(inp) = input_by_id("inp-cantidad") {
        inp.set_value(&target.cantidad.map(|c| c.to_string()).unwrap_or_default());
    }
    if let Some(inp) = input_by_id("inp-procedencia") {
        inp.set_value(&target.procedencia);
    }
    if let Some(venc) = input_by_id("inp-vencimiento") {
        venc.set_value("");
        venc.set_disabled(true);
    }

    show_modal();

    let state = state.clone();
    spawn_local(async move {
        ensure_categories_loaded(&state).await;
        // recién con las opciones puestas se puede seleccionar la de la fila
        if let (Some(select), Some(cat_id)) =
            (select_by_id(category_select::SELECT_ID), target.categoria_id)
        {
            select.set_value(&cat_id.to_string());
        }
    });
}

/// Cerrar solo oculta y cambia el estado; los campos quedan como estén
pub fn close_form_modal(state: &AppState) {
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let _ = remove_class(&modal, "is-open");
    }
    if let Some(body) = body() {
        let _ = body.class_list().remove_1("modal-open");
    }
    state.close_form();
}

/// Valida según el modo y dispara la operación que corresponde.
/// Un fallo de validación se resuelve acá y nunca llega a la red.
fn handle_submit(state: &AppState) {
    let input = read_form_input();
    let session = state.form_session.borrow().clone();

    if let Some(target) = session.edit_target() {
        let id = target.id;
        match validate_update(&input) {
            Ok(cambios) => {
                let state = state.clone();
                spawn_local(async move {
                    let guardando = saving_started();
                    let result = ProductsViewModel::new().update_product(id, &cambios).await;
                    saving_finished(guardando);

                    match result {
                        Ok(()) => finish_success(&state, "Producto actualizado correctamente."),
                        Err(e) => {
                            // el modal sigue abierto para corregir
                            log::error!("❌ Actualizar producto: {}", e);
                            show_toast(&format!("Error actualizando: {}", e), ToastKind::Error);
                        }
                    }
                });
            }
            Err(e) => show_toast(&e.to_string(), ToastKind::Error),
        }
    } else {
        match validate_create(&input) {
            Ok(nuevo) => {
                let state = state.clone();
                spawn_local(async move {
                    let guardando = saving_started();
                    let result = ProductsViewModel::new().create_product(&nuevo).await;
                    saving_finished(guardando);

                    match result {
                        Ok(mensaje) => finish_success(&state, &mensaje),
                        Err(e) => {
                            log::error!("❌ Guardar producto: {}", e);
                            show_toast(&format!("Error guardando: {}", e), ToastKind::Error);
                        }
                    }
                });
            }
            Err(e) => show_toast(&e.to_string(), ToastKind::Error),
        }
    }
}

/// Alta o edición exitosa: limpiar, cerrar, recargar la lista y avisar
fn finish_success(state: &AppState, mensaje: &str) {
    reset_form();
    close_form_modal(state);
    refresh_products(state);
    show_toast(mensaje, ToastKind::Success);
}

fn read_form_input() -> ProductFormInput {
    ProductFormInput {
        nombre: input_by_id("inp-nombre").map(|i| i.value()).unwrap_or_default(),
        categoria_id: select_by_id(category_select::SELECT_ID)
            .map(|s| s.value())
            .unwrap_or_default(),
        cantidad: input_by_id("inp-cantidad").map(|i| i.value()).unwrap_or_default(),
        procedencia: input_by_id("inp-procedencia").map(|i| i.value()).unwrap_or_default(),
        vencimiento: input_by_id("inp-vencimiento").map(|i| i.value()).unwrap_or_default(),
    }
}

/// Deshabilita el botón de guardar mientras hay una petición en vuelo
/// (evita envíos dobles) y devuelve la etiqueta previa para restaurarla.
fn saving_started() -> Option<String> {
    let btn = get_element_by_id(SAVE_BTN_ID)?;
    let previa = btn.text_content();
    set_text_content(&btn, "Guardando…");
    if let Ok(btn) = btn.dyn_into::<web_sys::HtmlButtonElement>() {
        btn.set_disabled(true);
    }
    previa
}

/// Se restaura siempre, haya salido bien o mal
fn saving_finished(etiqueta_previa: Option<String>) {
    if let Some(btn) = get_element_by_id(SAVE_BTN_ID) {
        set_text_content(&btn, etiqueta_previa.as_deref().unwrap_or("Guardar"));
        if let Ok(btn) = btn.dyn_into::<web_sys::HtmlButtonElement>() {
            btn.set_disabled(false);
        }
    }
}

fn reset_form() {
    if let Some(form) = get_element_by_id(FORM_ID) {
        if let Ok(form) = form.dyn_into::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }
}

fn show_modal() {
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let _ = add_class(&modal, "is-open");
    }
    if let Some(body) = body() {
        let _ = body.class_list().add_1("modal-open");
    }
}

fn set_label(id: &str, text: &str) {
    if let Some(el) = get_element_by_id(id) {
        set_text_content(&el, text);
    }
}

fn field_input(label: &str, id: &str, tipo: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let lbl = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", tipo)?
        .attr("name", id)?
        .build();
    append_child(&group, &lbl)?;
    append_child(&group, &input)?;
    Ok(group)
}

fn field_select(label: &str, id: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let lbl = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let select = ElementBuilder::new("select")?.id(id)?.attr("name", id)?.build();
    append_child(&group, &lbl)?;
    append_child(&group, &select)?;
    Ok(group)
}
