use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del backend. Vacía = mismo origen (paths relativos).
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Construye una URL absoluta (o relativa al origen) para un path del API
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_sin_base_es_relativa() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/api/v1/places"), "/api/v1/places");
    }

    #[test]
    fn api_url_con_base_la_antepone() {
        let config = AppConfig {
            api_base_url: "http://localhost:5000".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_url("/api/v1/auth/login"),
            "http://localhost:5000/api/v1/auth/login"
        );
    }
}
