// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: hace las peticiones y normaliza las respuestas.
// ============================================================================

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Category, Product};
use crate::utils::constants::BACKEND_URL;

/// Fallo de una operación contra el backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Red caída, DNS, CORS: la petición nunca obtuvo respuesta
    #[error("Error de red: {0}")]
    Transport(String),
    /// Respuesta con estado fuera de 2xx
    #[error("HTTP {0}")]
    Server(u16),
    /// Cuerpo que no se pudo interpretar
    #[error("Respuesta inválida: {0}")]
    Parse(String),
}

/// Campos de un producto nuevo, ya validados
/// Se envían como formulario urlencoded con los nombres fijos del backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nombre_producto: String,
    pub categoria_id: String,
    pub cantidad: String,
    pub procedencia: String,
    pub fecha_vencimiento: String,
}

/// Campos de una edición, ya validados
/// El backend de edición no acepta cantidad ni fecha de vencimiento.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductUpdate {
    pub nombre_producto: String,
    pub categoria_id: i64,
    pub procedencia: String,
}

#[derive(Deserialize)]
struct DeleteResponse {
    mensaje: Option<String>,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar categorías
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/categoria/listarcategoria", self.base_url);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server(response.status()));
        }
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_categories(body)
    }

    /// Listar productos
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/producto/listar", self.base_url);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server(response.status()));
        }
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_products(body)
    }

    /// Crear producto (formulario urlencoded; el backend responde texto plano)
    pub async fn create_product(&self, producto: &NewProduct) -> Result<String, ApiError> {
        let url = format!("{}/producto/guardarproducto", self.base_url);

        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Transport("no se pudo construir el formulario".to_string()))?;
        params.append("nombre_producto", &producto.nombre_producto);
        params.append("categoriaId", &producto.categoria_id);
        params.append("cantidad", &producto.cantidad);
        params.append("procedencia", &producto.procedencia);
        params.append("fecha_vencimiento", &producto.fecha_vencimiento);

        let response = Request::post(&url)
            .body(params)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server(response.status()));
        }
        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Editar producto (PUT con cuerpo JSON; el cuerpo de la respuesta es opcional)
    pub async fn update_product(&self, id: i64, cambios: &ProductUpdate) -> Result<(), ApiError> {
        let url = format!("{}/producto/editar/{}", self.base_url, id);
        let response = Request::put(&url)
            .header("Accept", "application/json")
            .json(cambios)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server(response.status()));
        }
        // se tolera un cuerpo vacío o no-JSON en la confirmación
        let _ = response.json::<Value>().await;
        Ok(())
    }

    /// Eliminar producto; devuelve el mensaje del servidor si lo hay
    pub async fn delete_product(&self, id: i64) -> Result<Option<String>, ApiError> {
        let url = format!("{}/producto/eliminar/{}", self.base_url, id);
        let response = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server(response.status()));
        }
        // cuerpo no-JSON: el mensaje lo arma quien llama con el nombre local
        Ok(response
            .json::<DeleteResponse>()
            .await
            .ok()
            .and_then(|r| r.mensaje))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Una respuesta que no es un arreglo se trata como lista vacía
fn parse_categories(body: Value) -> Result<Vec<Category>, ApiError> {
    match body {
        Value::Array(_) => {
            serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}

/// Una respuesta que no es un arreglo se trata como lista de un elemento
fn parse_products(body: Value) -> Result<Vec<Product>, ApiError> {
    if body.is_array() {
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        serde_json::from_value::<Product>(body)
            .map(|p| vec![p])
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn categorias_no_arreglo_es_lista_vacia() {
        assert_eq!(parse_categories(json!({"error": "raro"})).unwrap(), vec![]);
        assert_eq!(parse_categories(json!(null)).unwrap(), vec![]);
    }

    #[test]
    fn categorias_arreglo_se_deserializa() {
        let cats = parse_categories(json!([
            {"id": 1, "tipo_categoria": "Analgesic"},
            {"id": 2, "nombre": "Jarabes"}
        ]))
        .unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].etiqueta(), "Analgesic");
        assert_eq!(cats[1].etiqueta(), "Jarabes");
    }

    #[test]
    fn productos_objeto_suelto_es_lista_de_uno() {
        let prods = parse_products(json!({"id": 4, "nombre_producto": "Ibuprofeno"})).unwrap();
        assert_eq!(prods.len(), 1);
        assert_eq!(prods[0].nombre_producto, "Ibuprofeno");
    }

    #[test]
    fn productos_arreglo_se_deserializa() {
        let prods = parse_products(json!([
            {"id": 1, "nombre_producto": "A"},
            {"id": 2, "nombre_producto": "B"}
        ]))
        .unwrap();
        assert_eq!(prods.len(), 2);
    }

    #[test]
    fn error_de_servidor_muestra_el_estado() {
        assert_eq!(ApiError::Server(500).to_string(), "HTTP 500");
    }

    #[test]
    fn edicion_serializa_las_claves_fijas() {
        let cambios = ProductUpdate {
            nombre_producto: "Paracetamol".to_string(),
            categoria_id: 3,
            procedencia: "Lima".to_string(),
        };
        let json = serde_json::to_value(&cambios).unwrap();
        assert_eq!(
            json,
            json!({"nombre_producto": "Paracetamol", "categoria_id": 3, "procedencia": "Lima"})
        );
    }
}
