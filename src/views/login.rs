// ============================================================================
// LOGIN VIEW - Pantalla de ingreso
// ============================================================================
// Solo recolecta los campos del formulario: acá no hay sesiones ni tokens.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_by_id, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::views::toast::{show_toast, ToastKind};

/// Renderizar pantalla de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    let header = ElementBuilder::new("div")?.class("login-header").build();
    let title = ElementBuilder::new("h1")?.text("Farmacia TS").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Panel de administración de inventario")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = ElementBuilder::new("form")?.id("loginForm")?.class("login-form").build();

    let grupo_usuario = ElementBuilder::new("div")?.class("form-group").build();
    let label_usuario = ElementBuilder::new("label")?
        .attr("for", "login-usuario")?
        .text("Usuario")
        .build();
    let input_usuario = ElementBuilder::new("input")?
        .id("login-usuario")?
        .attr("type", "text")?
        .attr("name", "usuario")?
        .attr("placeholder", "Ingresa tu usuario")?
        .build();
    append_child(&grupo_usuario, &label_usuario)?;
    append_child(&grupo_usuario, &input_usuario)?;

    let grupo_password = ElementBuilder::new("div")?.class("form-group").build();
    let label_password = ElementBuilder::new("label")?
        .attr("for", "login-password")?
        .text("Contraseña")
        .build();
    let input_password = ElementBuilder::new("input")?
        .id("login-password")?
        .attr("type", "password")?
        .attr("name", "password")?
        .attr("placeholder", "Ingresa tu contraseña")?
        .build();
    append_child(&grupo_password, &label_password)?;
    append_child(&grupo_password, &input_password)?;

    let btn_login = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Iniciar Sesión")
        .build();

    append_child(&form, &grupo_usuario)?;
    append_child(&form, &grupo_password)?;
    append_child(&form, &btn_login)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();

            let usuario = input_by_id("login-usuario").map(|i| i.value()).unwrap_or_default();
            let password = input_by_id("login-password").map(|i| i.value()).unwrap_or_default();

            if usuario.is_empty() || password.is_empty() {
                show_toast("Completa usuario y contraseña.", ToastKind::Error);
                return;
            }

            log::info!("🔐 Login de {}", usuario);
            state.set_logged_in(true);
            crate::rerender_app();
            show_toast(&format!("Bienvenido, {}", usuario), ToastKind::Info);
        })?;
    }

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
