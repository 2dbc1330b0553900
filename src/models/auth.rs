use serde::{Deserialize, Serialize};

/// Body del login (POST /api/v1/auth/login)
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta exitosa del login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializa_email_y_password() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn login_response_lee_access_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
    }
}
