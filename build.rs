use std::env;
use std::fs;
use std::path::Path;

// Inyecta las variables de .env como variables de entorno de compilación
// (se leen luego con option_env!, ver src/utils/constants.rs)
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay archivo .env; se usa el backend por defecto. Copia .env.example a .env para configurarlo.");
        return;
    }

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let (key, value) = (key.trim(), value.trim());
                // una variable ya exportada en el entorno tiene prioridad
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }
}
