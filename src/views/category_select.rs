// ============================================================================
// CATEGORY SELECT - Selector de categorías del formulario
// ============================================================================
// Pobla el <select> del modal desde el caché de dos niveles; solo va a la
// red cuando ningún nivel tiene datos vigentes. Mientras carga, el control
// queda deshabilitado con un mensaje, y siempre se reactiva al terminar.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::HtmlSelectElement;

use crate::dom::{append_child, create_element, select_by_id, set_attribute, set_inner_html, set_text_content};
use crate::models::Category;
use crate::services::ApiClient;
use crate::state::AppState;

pub const SELECT_ID: &str = "sel-categoria";

/// Asegura que el selector tenga las categorías listas antes de usarlo.
/// Devuelve las categorías efectivas (vacío si la carga falló).
pub async fn ensure_categories_loaded(state: &AppState) -> Vec<Category> {
    let select = match select_by_id(SELECT_ID) {
        Some(select) => select,
        None => return Vec::new(),
    };

    // caché primero: memoria, después localStorage vigente
    if let Some(cats) = state.categories.cached() {
        let _ = fill_categories_select(&select, &cats);
        return cats;
    }

    // estado de carga mientras se consulta el backend
    set_inner_html(&select, "");
    let _ = loading_option(&select, "Cargando categorías…");
    select.set_disabled(true);

    let cats = match ApiClient::new().list_categories().await {
        Ok(cats) => {
            state.categories.store(&cats);
            let _ = fill_categories_select(&select, &cats);
            cats
        }
        Err(e) => {
            // ambos niveles quedan vacíos; el selector informa el fallo
            set_inner_html(&select, "");
            let _ = loading_option(&select, "Error cargando categorías");
            log::error!("❌ Categorías: {}", e);
            Vec::new()
        }
    };

    select.set_disabled(false);
    cats
}

/// Llena el select con el placeholder y una opción por categoría
pub fn fill_categories_select(
    select: &HtmlSelectElement,
    cats: &[Category],
) -> Result<(), JsValue> {
    set_inner_html(select, "");

    let placeholder = create_element("option")?;
    set_attribute(&placeholder, "value", "")?;
    set_attribute(&placeholder, "disabled", "")?;
    set_attribute(&placeholder, "selected", "")?;
    set_text_content(&placeholder, "Seleccione una categoría");
    append_child(select, &placeholder)?;

    for cat in cats {
        let option = create_element("option")?;
        set_attribute(&option, "value", &cat.id.to_string())?;
        set_text_content(&option, cat.etiqueta());
        append_child(select, &option)?;
    }
    Ok(())
}

fn loading_option(select: &HtmlSelectElement, mensaje: &str) -> Result<(), JsValue> {
    let option = create_element("option")?;
    set_attribute(&option, "disabled", "")?;
    set_attribute(&option, "selected", "")?;
    set_text_content(&option, mensaje);
    append_child(select, &option)
}
