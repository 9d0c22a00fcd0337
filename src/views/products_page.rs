// ============================================================================
// PRODUCTS PAGE - Pantalla de gestión de productos
// ============================================================================
// Tabla con la lista autoritativa del backend más los dos modales. La tabla
// nunca se muta fila a fila: cada operación exitosa dispara una recarga
// completa, así un resultado tardío no puede dejar datos viejos.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::models::Product;
use crate::state::{AppState, EditTarget};
use crate::viewmodels::ProductsViewModel;
use crate::views::confirm_modal::{open_delete_confirm, render_confirm_modal};
use crate::views::product_modal::{open_create, open_edit, render_product_modal};

const TBODY_ID: &str = "products-tbody";
const COLUMNAS: usize = 7;

/// Renderizar la pantalla completa de productos
pub fn render_products_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("products-page").build();

    // header con el botón de alta
    let header = ElementBuilder::new("div")?.class("products-header").build();
    let title = ElementBuilder::new("h1")?.text("Productos").build();
    let btn_open = ElementBuilder::new("button")?
        .attr("type", "button")?
        .id("btn-open-modal")?
        .class("btn-primary")
        .text("Nuevo producto")
        .build();
    {
        let state = state.clone();
        on_click(&btn_open, move |_| open_create(&state))?;
    }
    append_child(&header, &title)?;
    append_child(&header, &btn_open)?;

    // tabla
    let table = ElementBuilder::new("table")?.class("products-table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for columna in [
        "Id",
        "Nombre",
        "Categoría",
        "Descripción",
        "Cantidad",
        "Procedencia",
        "Acciones",
    ] {
        let th = ElementBuilder::new("th")?.text(columna).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;

    let tbody = ElementBuilder::new("tbody")?.id(TBODY_ID)?.build();
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;

    append_child(&page, &header)?;
    append_child(&page, &table)?;
    append_child(&page, &render_product_modal(state)?)?;
    append_child(&page, &render_confirm_modal(state)?)?;
    Ok(page)
}

/// Recargar la lista desde el backend y redibujar la tabla.
/// Un fallo se muestra como una única fila de error, sin romper nada más.
pub fn refresh_products(state: &AppState) {
    let Some(tbody) = get_element_by_id(TBODY_ID) else {
        return;
    };
    let _ = set_message_row(&tbody, "Cargando…");

    let state = state.clone();
    spawn_local(async move {
        let Some(tbody) = get_element_by_id(TBODY_ID) else {
            return;
        };
        match ProductsViewModel::new().load_products().await {
            Ok(products) => {
                state.set_products(products.clone());
                if let Err(e) = render_rows(&state, &tbody, &products) {
                    log::error!("❌ Error dibujando la tabla: {:?}", e);
                }
            }
            Err(e) => {
                log::error!("❌ Productos: {}", e);
                let _ = set_message_row(&tbody, &format!("Error cargando productos: {}", e));
            }
        }
    });
}

/// Una única fila de mensaje ocupando todas las columnas
fn set_message_row(tbody: &Element, mensaje: &str) -> Result<(), JsValue> {
    set_inner_html(tbody, "");
    let row = ElementBuilder::new("tr")?.build();
    let cell = ElementBuilder::new("td")?
        .attr("colspan", &COLUMNAS.to_string())?
        .class("row-message")
        .text(mensaje)
        .build();
    append_child(&row, &cell)?;
    append_child(tbody, &row)
}

fn render_rows(state: &AppState, tbody: &Element, products: &[Product]) -> Result<(), JsValue> {
    if products.is_empty() {
        return set_message_row(tbody, "Sin resultados");
    }

    set_inner_html(tbody, "");
    for producto in products {
        append_child(tbody, &render_row(state, producto)?)?;
    }
    Ok(())
}

fn render_row(state: &AppState, producto: &Product) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    for valor in [
        producto.id.to_string(),
        producto.nombre_producto.clone(),
        producto.categoria_etiqueta().to_string(),
        producto.categoria_descripcion().to_string(),
        producto.cantidad_texto(),
        producto.procedencia.clone().unwrap_or_default(),
    ] {
        let td = ElementBuilder::new("td")?.text(&valor).build();
        append_child(&row, &td)?;
    }

    // acciones: editar y eliminar llevan los datos desnormalizados de la fila
    let actions_cell = ElementBuilder::new("td")?.build();
    let actions = ElementBuilder::new("div")?.class("row-actions").build();

    let btn_edit = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("title", "Editar")?
        .class("btn-primary")
        .text("✏️")
        .build();
    {
        let state = state.clone();
        let target = EditTarget {
            id: producto.id,
            nombre: producto.nombre_producto.clone(),
            categoria_id: producto.categoria.as_ref().map(|c| c.id),
            cantidad: producto.cantidad,
            procedencia: producto.procedencia.clone().unwrap_or_default(),
        };
        on_click(&btn_edit, move |_| open_edit(&state, target.clone()))?;
    }

    let btn_delete = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("title", "Eliminar")?
        .class("btn-danger")
        .text("🗑️")
        .build();
    {
        let state = state.clone();
        let id = producto.id;
        let nombre = producto.nombre_producto.clone();
        on_click(&btn_delete, move |_| {
            open_delete_confirm(&state, id, nombre.clone())
        })?;
    }

    append_child(&actions, &btn_edit)?;
    append_child(&actions, &btn_delete)?;
    append_child(&actions_cell, &actions)?;
    append_child(&row, &actions_cell)?;
    Ok(row)
}
