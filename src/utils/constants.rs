/// URL base del backend REST (sin barra final)
/// Configurada en tiempo de compilación:
/// - Por defecto: el backend de producción en Render
/// - Personalizada: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://tf-farmacia-backend.onrender.com",
};
