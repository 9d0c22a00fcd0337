// ============================================================================
// PRODUCTS VIEWMODEL - LÓGICA DE PRODUCTOS
// ============================================================================
// Valida los campos del formulario y habla con el ApiClient. Las vistas
// leen el DOM y muestran toasts; acá no se toca el DOM.
// ============================================================================

use crate::models::Product;
use crate::services::api_client::{ApiClient, ApiError, NewProduct, ProductUpdate};

/// Campo requerido ausente; se resuelve localmente y nunca llega a la red
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// Valores crudos leídos del formulario, tal como vienen de los inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormInput {
    pub nombre: String,
    pub categoria_id: String,
    pub cantidad: String,
    pub procedencia: String,
    pub vencimiento: String,
}

/// Alta: los cinco campos son obligatorios
pub fn validate_create(input: &ProductFormInput) -> Result<NewProduct, ValidationError> {
    let nombre = input.nombre.trim();
    let procedencia = input.procedencia.trim();

    if nombre.is_empty()
        || input.categoria_id.is_empty()
        || input.cantidad.is_empty()
        || procedencia.is_empty()
        || input.vencimiento.is_empty()
    {
        return Err(ValidationError("Completa todos los campos."));
    }

    Ok(NewProduct {
        nombre_producto: nombre.to_string(),
        categoria_id: input.categoria_id.clone(),
        cantidad: input.cantidad.clone(),
        procedencia: procedencia.to_string(),
        fecha_vencimiento: input.vencimiento.clone(),
    })
}

/// Edición: solo nombre, categoría y procedencia; la cantidad y la fecha de
/// vencimiento no se envían (la cantidad se ajusta por otro circuito y la
/// fecha es inmutable después del alta).
pub fn validate_update(input: &ProductFormInput) -> Result<ProductUpdate, ValidationError> {
    let nombre = input.nombre.trim();
    let procedencia = input.procedencia.trim();

    if nombre.is_empty() || input.categoria_id.is_empty() || procedencia.is_empty() {
        return Err(ValidationError("Completa nombre, categoría y procedencia."));
    }

    let categoria_id = input
        .categoria_id
        .parse::<i64>()
        .map_err(|_| ValidationError("Completa nombre, categoría y procedencia."))?;

    Ok(ProductUpdate {
        nombre_producto: nombre.to_string(),
        categoria_id,
        procedencia: procedencia.to_string(),
    })
}

/// Mensaje de éxito de una eliminación: se prefiere el del servidor y, si no
/// vino o vino vacío, se arma uno con el nombre conocido localmente.
pub fn delete_success_message(servidor: Option<String>, nombre: &str) -> String {
    servidor
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Producto \"{}\" eliminado correctamente.", nombre))
}

/// ViewModel de productos - SOLO lógica de negocio
pub struct ProductsViewModel {
    api_client: ApiClient,
}

impl ProductsViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Pide la lista autoritativa al backend
    pub async fn load_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.api_client.list_products().await?;
        log::info!("📦 Productos cargados: {}", products.len());
        Ok(products)
    }

    /// Alta de producto; devuelve el mensaje de texto del backend
    pub async fn create_product(&self, producto: &NewProduct) -> Result<String, ApiError> {
        let mensaje = self.api_client.create_product(producto).await?;
        log::info!("✅ Producto guardado: {}", producto.nombre_producto);
        Ok(mensaje)
    }

    /// Edición de producto existente
    pub async fn update_product(&self, id: i64, cambios: &ProductUpdate) -> Result<(), ApiError> {
        self.api_client.update_product(id, cambios).await?;
        log::info!("✅ Producto {} actualizado", id);
        Ok(())
    }

    /// Eliminación; el mensaje final siempre existe (servidor o respaldo)
    pub async fn delete_product(&self, id: i64, nombre: &str) -> Result<String, ApiError> {
        let mensaje = self.api_client.delete_product(id).await?;
        log::info!("🗑️ Producto {} eliminado", id);
        Ok(delete_success_message(mensaje, nombre))
    }
}

impl Default for ProductsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completo() -> ProductFormInput {
        ProductFormInput {
            nombre: "Paracetamol".to_string(),
            categoria_id: "3".to_string(),
            cantidad: "40".to_string(),
            procedencia: "Lima".to_string(),
            vencimiento: "2027-01-31".to_string(),
        }
    }

    #[test]
    fn alta_valida_construye_la_peticion() {
        let producto = validate_create(&completo()).unwrap();
        assert_eq!(producto.nombre_producto, "Paracetamol");
        assert_eq!(producto.categoria_id, "3");
        assert_eq!(producto.cantidad, "40");
        assert_eq!(producto.fecha_vencimiento, "2027-01-31");
    }

    #[test]
    fn alta_exige_los_cinco_campos() {
        for faltante in ["nombre", "categoria", "cantidad", "procedencia", "vencimiento"] {
            let mut input = completo();
            match faltante {
                "nombre" => input.nombre.clear(),
                "categoria" => input.categoria_id.clear(),
                "cantidad" => input.cantidad.clear(),
                "procedencia" => input.procedencia.clear(),
                _ => input.vencimiento.clear(),
            }
            let err = validate_create(&input).unwrap_err();
            assert_eq!(err.to_string(), "Completa todos los campos.");
        }
    }

    #[test]
    fn alta_recorta_espacios_antes_de_validar() {
        let mut input = completo();
        input.nombre = "   ".to_string();
        assert!(validate_create(&input).is_err());

        let mut input = completo();
        input.nombre = "  Paracetamol  ".to_string();
        input.procedencia = " Lima ".to_string();
        let producto = validate_create(&input).unwrap();
        assert_eq!(producto.nombre_producto, "Paracetamol");
        assert_eq!(producto.procedencia, "Lima");
    }

    #[test]
    fn edicion_solo_exige_nombre_categoria_y_procedencia() {
        let mut input = completo();
        input.cantidad.clear();
        input.vencimiento.clear();

        let cambios = validate_update(&input).unwrap();
        assert_eq!(cambios.nombre_producto, "Paracetamol");
        assert_eq!(cambios.categoria_id, 3);
        assert_eq!(cambios.procedencia, "Lima");
    }

    #[test]
    fn edicion_sin_requeridos_no_pasa() {
        for faltante in ["nombre", "categoria", "procedencia"] {
            let mut input = completo();
            match faltante {
                "nombre" => input.nombre.clear(),
                "categoria" => input.categoria_id.clear(),
                _ => input.procedencia.clear(),
            }
            let err = validate_update(&input).unwrap_err();
            assert_eq!(err.to_string(), "Completa nombre, categoría y procedencia.");
        }
    }

    #[test]
    fn edicion_convierte_la_categoria_a_numero() {
        let mut input = completo();
        input.categoria_id = "no-numerico".to_string();
        assert!(validate_update(&input).is_err());
    }

    #[test]
    fn mensaje_de_eliminacion_prefiere_el_del_servidor() {
        assert_eq!(
            delete_success_message(Some("Eliminado con items.".to_string()), "Aspirina"),
            "Eliminado con items."
        );
    }

    #[test]
    fn mensaje_de_eliminacion_con_respaldo_local() {
        let esperado = "Producto \"Aspirina\" eliminado correctamente.";
        assert_eq!(delete_success_message(None, "Aspirina"), esperado);
        assert_eq!(delete_success_message(Some("  ".to_string()), "Aspirina"), esperado);
    }
}
