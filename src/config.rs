use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://167.172.19.104:3003/api";
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
const DEFAULT_NAVIGATION_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del API (incluye `/api`)
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    /// Pausa tras crear la empresa para que se vea la notificación
    pub navigation_delay_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            navigation_delay_ms: DEFAULT_NAVIGATION_DELAY_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("API_TIMEOUT_MS"),
            option_env!("NAVIGATION_DELAY_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        timeout_ms: Option<&str>,
        navigation_delay_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            request_timeout_ms: timeout_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            navigation_delay_ms: navigation_delay_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.navigation_delay_ms),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
