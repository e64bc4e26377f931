use std::env;
use std::fs;
use std::path::Path;

// Variables que lee `AppConfig::from_env()` vía option_env!
const KNOWN_KEYS: &[&str] = &[
    "BACKEND_URL",
    "LOGIN_PATH",
    "ENABLE_LOGGING",
    "PAYMENTS_PER_PAGE",
    "TOAST_ENTER_DELAY_MS",
    "TOAST_DURATION_MS",
    "TOAST_EXIT_MS",
    "FEATURE_ADMIN_PANEL",
    "FEATURE_PAYMENTS",
];

fn main() {
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env, usando valores por defecto");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
