// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Sin retry ni backoff: los fallos se reportan una sola vez al caller.
// ============================================================================

use std::fmt;

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, NewReview, PlaceDetail, PlaceSummary};

/// Fallo uniforme de una llamada al API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// El request no se pudo enviar/recibir (fetch rechazado)
    Network(String),
    /// Respuesta recibida con status no-2xx (credenciales malas, validación)
    Http(u16),
    /// El body no se pudo parsear
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http(status) => write!(f, "HTTP {}", status),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Login con email y password. Un status no-2xx es fallo de dominio
    /// (credenciales inválidas), no de transporte.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.url("/api/v1/auth/login");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Login para usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("🔐 Login rechazado: HTTP {}", response.status());
            return Err(ApiError::Http(response.status()));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Listar places. El token es opcional (navegación anónima permitida);
    /// si está presente se adjunta como bearer.
    pub async fn list_places(&self, token: Option<&str>) -> Result<Vec<PlaceSummary>, ApiError> {
        let url = self.url("/api/v1/places");

        let mut request = Request::get(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let places = response
            .json::<Vec<PlaceSummary>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("🏠 {} places recibidos", places.len());

        Ok(places)
    }

    /// Obtener el detalle de un place por ID (sin auth)
    pub async fn get_place_detail(&self, place_id: &str) -> Result<PlaceDetail, ApiError> {
        let url = self.url(&format!("/api/v1/places/{}", place_id));

        log::info!("📍 Obteniendo detalle del place: {}", place_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        response
            .json::<PlaceDetail>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Crear una review. Requiere token (el caller ya redirigió a los
    /// usuarios no autenticados antes de llamar aquí).
    pub async fn create_review(
        &self,
        token: &str,
        place_id: &str,
        text: &str,
        rating: i32,
    ) -> Result<(), ApiError> {
        let url = self.url("/api/v1/reviews/");
        let review = NewReview {
            text: text.to_string(),
            rating,
            place_id: place_id.to_string(),
        };

        log::info!("⭐ Enviando review para place: {}", place_id);

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(&review)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        assert_eq!(ApiError::Http(401).to_string(), "HTTP 401");
        assert_eq!(
            ApiError::Network("failed to fetch".to_string()).to_string(),
            "Network error: failed to fetch"
        );
    }

    #[test]
    fn url_usa_base_configurada() {
        let api = ApiClient {
            base_url: "http://localhost:5000".to_string(),
        };
        assert_eq!(
            api.url("/api/v1/places"),
            "http://localhost:5000/api/v1/places"
        );
    }
}
