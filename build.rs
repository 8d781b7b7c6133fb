use std::env;
use std::fs;
use std::path::Path;

// Claves que `AppConfig::from_env` lee con option_env!
const FORWARDED_KEYS: &[&str] = &[
    "API_BASE_URL",
    "API_TIMEOUT_MS",
    "NAVIGATION_DELAY_MS",
    "ENABLE_LOGGING",
];

fn main() {
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno real tiene prioridad sobre .env
                    if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
