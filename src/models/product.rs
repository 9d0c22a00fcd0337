use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Producto del inventario
/// Solo se modifica mediante el backend; después de cada operación la lista
/// se vuelve a pedir completa en lugar de mutar campos localmente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub nombre_producto: String,
    /// Categoría desnormalizada para mostrar en la tabla
    #[serde(default)]
    pub categoria: Option<Category>,
    #[serde(default)]
    pub cantidad: Option<i64>,
    #[serde(default)]
    pub procedencia: Option<String>,
    /// Solo se fija al crear; el backend no la devuelve en todas las listas
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
}

impl Product {
    pub fn categoria_etiqueta(&self) -> &str {
        self.categoria.as_ref().map(|c| c.etiqueta()).unwrap_or("")
    }

    pub fn categoria_descripcion(&self) -> &str {
        self.categoria
            .as_ref()
            .and_then(|c| c.descripcion_categoria.as_deref())
            .unwrap_or("")
    }

    pub fn cantidad_texto(&self) -> String {
        self.cantidad.map(|c| c.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_producto_completo() {
        let json = r#"{
            "id": 7,
            "nombre_producto": "Paracetamol",
            "categoria": {"id": 1, "tipo_categoria": "Analgésico", "descripcion_categoria": "Dolor"},
            "cantidad": 40,
            "procedencia": "Lima"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.nombre_producto, "Paracetamol");
        assert_eq!(p.categoria_etiqueta(), "Analgésico");
        assert_eq!(p.cantidad_texto(), "40");
    }

    #[test]
    fn tolera_campos_ausentes() {
        let p: Product = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(p.nombre_producto, "");
        assert_eq!(p.categoria_etiqueta(), "");
        assert_eq!(p.categoria_descripcion(), "");
        assert_eq!(p.cantidad_texto(), "");
        assert!(p.procedencia.is_none());
    }
}
