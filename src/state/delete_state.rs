// ============================================================================
// DELETE STATE - Eliminación pendiente de confirmar
// ============================================================================

/// Producto marcado para eliminar mientras el diálogo de confirmación está
/// abierto. Se guarda el nombre para mostrarlo y para armar el mensaje de
/// respaldo si el servidor no devuelve uno.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDeletion {
    pub id: i64,
    pub nombre: String,
}
