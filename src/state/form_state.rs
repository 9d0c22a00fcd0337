// ============================================================================
// FORM STATE - Estado del modal de alta/edición de productos
// ============================================================================

/// Datos desnormalizados de la fila con la que se abrió el modo edición,
/// usados para precargar el formulario.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: i64,
    pub nombre: String,
    pub categoria_id: Option<i64>,
    pub cantidad: Option<i64>,
    pub procedencia: String,
}

/// Sesión del modal: cerrado, creando, o editando un producto concreto.
/// El id objetivo solo existe en modo edición, así que no puede quedar un
/// id colgado con el modal en modo crear.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormSession {
    #[default]
    Closed,
    Create,
    Edit(EditTarget),
}

impl FormSession {
    /// Abrir en modo crear descarta cualquier objetivo de edición previo
    pub fn open_create(&mut self) {
        *self = FormSession::Create;
    }

    pub fn open_edit(&mut self, target: EditTarget) {
        *self = FormSession::Edit(target);
    }

    /// Cerrar solo cambia el estado; limpiar campos es cosa de la vista
    pub fn close(&mut self) {
        *self = FormSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormSession::Closed)
    }

    pub fn edit_target(&self) -> Option<&EditTarget> {
        match self {
            FormSession::Edit(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objetivo() -> EditTarget {
        EditTarget {
            id: 42,
            nombre: "Aspirina".to_string(),
            categoria_id: Some(1),
            cantidad: Some(10),
            procedencia: "Lima".to_string(),
        }
    }

    #[test]
    fn arranca_cerrado_y_sin_objetivo() {
        let session = FormSession::default();
        assert!(!session.is_open());
        assert_eq!(session.edit_target(), None);
    }

    #[test]
    fn abrir_en_crear_no_tiene_objetivo() {
        let mut session = FormSession::default();
        session.open_create();
        assert!(session.is_open());
        assert_eq!(session.edit_target(), None);
    }

    #[test]
    fn abrir_en_editar_guarda_el_objetivo() {
        let mut session = FormSession::default();
        session.open_edit(objetivo());
        assert!(session.is_open());
        assert_eq!(session.edit_target().map(|t| t.id), Some(42));
    }

    #[test]
    fn reabrir_en_crear_descarta_la_edicion_anterior() {
        let mut session = FormSession::default();
        session.open_edit(objetivo());
        session.open_create();
        assert_eq!(session.edit_target(), None);
    }

    #[test]
    fn cerrar_vuelve_al_estado_inicial() {
        let mut session = FormSession::default();
        session.open_edit(objetivo());
        session.close();
        assert_eq!(session, FormSession::Closed);
        assert_eq!(session.edit_target(), None);
    }
}
