// ============================================================================
// CATEGORY CACHE - Caché de categorías en dos niveles
// ============================================================================
// Nivel 1: memoria del proceso (vive lo que vive la página, sin expiración).
// Nivel 2: almacenamiento persistente con marca de tiempo y TTL de una hora.
// Cualquier fallo del almacenamiento se trata como caché vacío.
// ============================================================================

use std::cell::RefCell;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Category;
use crate::services::storage::StorageBackend;

/// Clave versionada: un cambio de formato invalida las entradas viejas solas
const CATS_CACHE_KEY: &str = "ts_cats_cache_v1";
const CATS_TTL_HOURS: i64 = 1;

/// Entrada persistida: marca de tiempo + datos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub ts: DateTime<Utc>,
    pub data: Vec<Category>,
}

impl CacheEntry {
    pub fn new(data: Vec<Category>) -> Self {
        Self {
            ts: Utc::now(),
            data,
        }
    }

    /// Vigente si no pasó el TTL desde que se guardó
    pub fn es_vigente(&self) -> bool {
        Utc::now() - self.ts <= Duration::hours(CATS_TTL_HOURS)
    }
}

/// Caché de categorías en dos niveles
pub struct CategoryCache<S: StorageBackend> {
    storage: S,
    mem: RefCell<Option<Vec<Category>>>,
}

impl<S: StorageBackend> CategoryCache<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            mem: RefCell::new(None),
        }
    }

    /// Devuelve las categorías cacheadas, si las hay.
    /// Primero memoria (sin chequeo de expiración: la vida del proceso ya la
    /// acota la página); si no, el nivel persistente, que se promueve a
    /// memoria cuando está vigente. Una entrada vacía cuenta como ausente.
    pub fn cached(&self) -> Option<Vec<Category>> {
        if let Some(cats) = self.mem.borrow().as_ref() {
            if !cats.is_empty() {
                return Some(cats.clone());
            }
        }

        let entry = self.read_persisted()?;
        if entry.es_vigente() && !entry.data.is_empty() {
            *self.mem.borrow_mut() = Some(entry.data.clone());
            return Some(entry.data);
        }
        None
    }

    /// Guarda las categorías en ambos niveles con marca de tiempo nueva.
    /// Un fallo del almacenamiento persistente se degrada a solo-memoria.
    pub fn store(&self, cats: &[Category]) {
        *self.mem.borrow_mut() = Some(cats.to_vec());

        let entry = CacheEntry::new(cats.to_vec());
        match serde_json::to_string(&entry) {
            Ok(json) => {
                if let Err(e) = self.storage.write(CATS_CACHE_KEY, &json) {
                    log::warn!("⚠️ No se pudo persistir el caché de categorías: {}", e);
                }
            }
            Err(e) => log::warn!("⚠️ Error serializando caché de categorías: {}", e),
        }
    }

    /// Lee la entrada persistida; JSON corrupto o formato viejo es un miss
    fn read_persisted(&self) -> Option<CacheEntry> {
        let raw = self.storage.read(CATS_CACHE_KEY)?;
        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("⚠️ Caché de categorías corrupto, se descarta: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    fn categorias() -> Vec<Category> {
        vec![Category {
            id: 1,
            tipo_categoria: Some("Analgesic".to_string()),
            nombre: None,
            descripcion_categoria: None,
        }]
    }

    fn persistir(storage: &MemoryStorage, entry: &CacheEntry) {
        storage
            .write(CATS_CACHE_KEY, &serde_json::to_string(entry).unwrap())
            .unwrap();
    }

    #[test]
    fn cache_vacio_no_devuelve_nada() {
        let cache = CategoryCache::new(MemoryStorage::new());
        assert_eq!(cache.cached(), None);
    }

    #[test]
    fn store_llena_ambos_niveles_con_marca_reciente() {
        let cache = CategoryCache::new(MemoryStorage::new());
        cache.store(&categorias());

        // nivel memoria
        assert_eq!(cache.cached(), Some(categorias()));

        // nivel persistente, con timestamp ≈ ahora
        let entry = cache.read_persisted().unwrap();
        assert_eq!(entry.data, categorias());
        assert!(Utc::now() - entry.ts < Duration::seconds(5));
        assert!(entry.es_vigente());
    }

    #[test]
    fn entrada_vigente_se_promueve_a_memoria() {
        let storage = MemoryStorage::new();
        persistir(&storage, &CacheEntry::new(categorias()));

        let cache = CategoryCache::new(storage);
        assert_eq!(cache.cached(), Some(categorias()));
        // ya quedó en memoria
        assert_eq!(cache.mem.borrow().as_ref(), Some(&categorias()));
    }

    #[test]
    fn entrada_expirada_cuenta_como_ausente() {
        let storage = MemoryStorage::new();
        let vieja = CacheEntry {
            ts: Utc::now() - Duration::hours(2),
            data: categorias(),
        };
        persistir(&storage, &vieja);

        let cache = CategoryCache::new(storage);
        assert_eq!(cache.cached(), None);
        assert!(cache.mem.borrow().is_none());
    }

    #[test]
    fn entrada_justo_dentro_del_ttl_sigue_vigente() {
        let entry = CacheEntry {
            ts: Utc::now() - Duration::minutes(59),
            data: categorias(),
        };
        assert!(entry.es_vigente());

        let pasada = CacheEntry {
            ts: Utc::now() - Duration::minutes(61),
            data: categorias(),
        };
        assert!(!pasada.es_vigente());
    }

    #[test]
    fn entrada_vacia_cuenta_como_ausente() {
        let storage = MemoryStorage::new();
        persistir(&storage, &CacheEntry::new(vec![]));

        let cache = CategoryCache::new(storage);
        assert_eq!(cache.cached(), None);
    }

    #[test]
    fn json_corrupto_cuenta_como_ausente() {
        let storage = MemoryStorage::new();
        storage.write(CATS_CACHE_KEY, "{esto no es json").unwrap();

        let cache = CategoryCache::new(storage);
        assert_eq!(cache.cached(), None);
    }

    #[test]
    fn formato_viejo_cuenta_como_ausente() {
        // formato anterior: { "ts": <milisegundos>, "data": [...] }
        let storage = MemoryStorage::new();
        storage
            .write(CATS_CACHE_KEY, r#"{"ts": 1700000000000, "data": []}"#)
            .unwrap();

        let cache = CategoryCache::new(storage);
        assert_eq!(cache.cached(), None);
    }
}
