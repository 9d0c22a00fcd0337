use serde::{Deserialize, Serialize};

/// Categoría de producto
/// Inmutable una vez obtenida del backend; la identidad es el `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub tipo_categoria: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion_categoria: Option<String>,
}

impl Category {
    /// Etiqueta para mostrar: tipo_categoria, o nombre como respaldo
    pub fn etiqueta(&self) -> &str {
        self.tipo_categoria
            .as_deref()
            .or(self.nombre.as_deref())
            .unwrap_or("Sin nombre")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(tipo: Option<&str>, nombre: Option<&str>) -> Category {
        Category {
            id: 1,
            tipo_categoria: tipo.map(String::from),
            nombre: nombre.map(String::from),
            descripcion_categoria: None,
        }
    }

    #[test]
    fn etiqueta_prefiere_tipo_categoria() {
        assert_eq!(cat(Some("Analgésico"), Some("otro")).etiqueta(), "Analgésico");
    }

    #[test]
    fn etiqueta_usa_nombre_como_respaldo() {
        assert_eq!(cat(None, Some("Antibiótico")).etiqueta(), "Antibiótico");
        assert_eq!(cat(None, None).etiqueta(), "Sin nombre");
    }

    #[test]
    fn deserializa_respuesta_del_backend() {
        let json = r#"{"id": 3, "tipo_categoria": "Analgesic", "descripcion_categoria": "Para el dolor"}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.etiqueta(), "Analgesic");
        assert_eq!(c.descripcion_categoria.as_deref(), Some("Para el dolor"));
    }
}
