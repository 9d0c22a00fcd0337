// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Todo el estado mutable vive acá, como valores explícitos de la instancia
// (nada de globales sueltos): la sesión del formulario, la eliminación
// pendiente y el caché de categorías son campos, y las pruebas pueden crear
// tantas instancias independientes como necesiten.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Product;
use crate::services::storage::LocalStorage;
use crate::services::CategoryCache;
use crate::state::delete_state::PendingDeletion;
use crate::state::form_state::{EditTarget, FormSession};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// El login solo recolecta campos; esto decide qué pantalla se ve
    pub logged_in: Rc<RefCell<bool>>,

    /// Última lista autoritativa devuelta por el backend
    pub products: Rc<RefCell<Vec<Product>>>,

    /// Sesión del modal de alta/edición
    pub form_session: Rc<RefCell<FormSession>>,

    /// Eliminación esperando confirmación
    pub pending_delete: Rc<RefCell<Option<PendingDeletion>>>,

    /// Caché de categorías (memoria + localStorage)
    pub categories: Rc<CategoryCache<LocalStorage>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            logged_in: Rc::new(RefCell::new(false)),
            products: Rc::new(RefCell::new(Vec::new())),
            form_session: Rc::new(RefCell::new(FormSession::default())),
            pending_delete: Rc::new(RefCell::new(None)),
            categories: Rc::new(CategoryCache::new(LocalStorage)),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    pub fn set_logged_in(&self, value: bool) {
        *self.logged_in.borrow_mut() = value;
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    // --- sesión del formulario -------------------------------------------

    pub fn open_create_form(&self) {
        self.form_session.borrow_mut().open_create();
    }

    pub fn open_edit_form(&self, target: EditTarget) {
        self.form_session.borrow_mut().open_edit(target);
    }

    pub fn close_form(&self) {
        self.form_session.borrow_mut().close();
    }

    // --- eliminación pendiente -------------------------------------------

    pub fn request_delete(&self, id: i64, nombre: String) {
        *self.pending_delete.borrow_mut() = Some(PendingDeletion { id, nombre });
    }

    pub fn cancel_delete(&self) {
        *self.pending_delete.borrow_mut() = None;
    }

    /// Consume la eliminación pendiente al confirmar; None = no-op
    pub fn take_pending_delete(&self) -> Option<PendingDeletion> {
        self.pending_delete.borrow_mut().take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pedir_eliminacion_deja_el_objetivo_pendiente() {
        let state = AppState::new();
        assert_eq!(state.take_pending_delete(), None);

        state.request_delete(42, "Aspirina".to_string());
        assert_eq!(
            *state.pending_delete.borrow(),
            Some(PendingDeletion {
                id: 42,
                nombre: "Aspirina".to_string()
            })
        );
    }

    #[test]
    fn confirmar_consume_el_pendiente() {
        let state = AppState::new();
        state.request_delete(42, "Aspirina".to_string());

        let pendiente = state.take_pending_delete().unwrap();
        assert_eq!(pendiente.id, 42);
        assert_eq!(pendiente.nombre, "Aspirina");

        // una segunda confirmación no tiene nada que hacer
        assert_eq!(state.take_pending_delete(), None);
    }

    #[test]
    fn cancelar_limpia_sin_consumir() {
        let state = AppState::new();
        state.request_delete(7, "Jarabe".to_string());
        state.cancel_delete();
        assert_eq!(state.take_pending_delete(), None);
    }

    #[test]
    fn una_eliminacion_nueva_reemplaza_la_anterior() {
        let state = AppState::new();
        state.request_delete(1, "A".to_string());
        state.request_delete(2, "B".to_string());
        assert_eq!(state.take_pending_delete().map(|p| p.id), Some(2));
    }

    #[test]
    fn instancias_independientes_no_comparten_estado() {
        let a = AppState::new();
        let b = AppState::new();
        a.request_delete(1, "A".to_string());
        assert_eq!(b.take_pending_delete(), None);
    }
}
