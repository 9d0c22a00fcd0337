// ============================================================================
// STORAGE - Capa de almacenamiento persistente del navegador
// ============================================================================
// El acceso a localStorage queda detrás de un trait para poder usar un
// respaldo en memoria en las pruebas (localStorage no existe fuera del
// navegador).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::window;

/// Fallo de lectura/escritura del almacenamiento persistente.
/// Quien lo consume lo degrada a un fallo de caché; nunca llega al usuario.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("almacenamiento no disponible: {0}")]
pub struct StorageError(pub String);

/// Capacidad de almacenamiento clave/valor
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage del navegador
#[derive(Debug, Default, Clone)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError("no se pudo acceder a localStorage".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError("error guardando en localStorage".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError("error eliminando de localStorage".to_string()))
    }
}

/// Almacenamiento en memoria para pruebas
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memoria_lee_lo_escrito() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("clave"), None);

        storage.write("clave", "valor").unwrap();
        assert_eq!(storage.read("clave").as_deref(), Some("valor"));

        storage.remove("clave").unwrap();
        assert_eq!(storage.read("clave"), None);
    }
}
