// ============================================================================
// SESSION SERVICE - Estado de autenticación derivado de la cookie
// ============================================================================
// El token NO se guarda en estado propio: se relee de la cookie en cada
// consulta. La presencia del token es el único gate de "autenticado";
// no se valida formato ni expiry del lado cliente.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom;
use crate::utils::cookies::CookieJar;
use crate::utils::navigation::{self, LOGIN_PATH};

/// Nombre de la cookie que guarda el bearer token
pub const TOKEN_COOKIE: &str = "token";

/// Resultado explícito del gate de autenticación.
/// Reemplaza el control-flow "redirige y no retorna": el caller decide
/// el early-exit con un match.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthGate {
    Authorized(String),
    RedirectRequired,
}

#[derive(Clone)]
pub struct SessionService {
    jar: CookieJar,
}

impl SessionService {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Sesión sobre document.cookie real
    pub fn browser() -> Self {
        Self::new(CookieJar::browser())
    }

    /// Token actual, releído de la cookie en cada llamada
    pub fn current_token(&self) -> Option<String> {
        self.jar.get(TOKEN_COOKIE)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_token().is_some()
    }

    /// Gate de autenticación: el caller debe hacer match y, en caso de
    /// RedirectRequired, navegar a login y cortar el flujo.
    pub fn auth_gate(&self) -> AuthGate {
        match self.current_token() {
            Some(token) => AuthGate::Authorized(token),
            None => AuthGate::RedirectRequired,
        }
    }

    /// Persistir el token tras un login exitoso
    pub fn store_token(&self, token: &str) {
        self.jar.set(TOKEN_COOKIE, token);
        log::info!("🍪 Token guardado en cookie");
    }

    /// Borrar el token (la cookie se escribe ya expirada)
    pub fn clear_token(&self) {
        self.jar.clear(TOKEN_COOKIE);
    }

    /// Logout: borrar token y volver al login
    pub fn logout(&self) {
        log::info!("👋 Logout, limpiando token");
        self.clear_token();
        navigation::navigate_to(LOGIN_PATH);
    }

    /// Toggle de visibilidad del link de login según autenticación
    pub fn update_login_button(&self) -> Result<(), JsValue> {
        if let Some(login_link) = dom::get_element_by_id("login-button") {
            let display = if self.is_authenticated() {
                "none"
            } else {
                "inline-block"
            };
            dom::set_display(&login_link, display)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cookies::testing::MemoryCookies;
    use std::rc::Rc;

    fn session_with(raw: &str) -> SessionService {
        SessionService::new(CookieJar::new(Rc::new(MemoryCookies::with_raw(raw))))
    }

    #[test]
    fn autenticado_solo_si_hay_token() {
        assert!(session_with("token=abc").is_authenticated());
        assert!(session_with("lang=es; token=abc; theme=dark").is_authenticated());
        assert!(!session_with("lang=es").is_authenticated());
        assert!(!session_with("").is_authenticated());
    }

    #[test]
    fn current_token_relee_la_cookie() {
        let session = session_with("");
        assert_eq!(session.current_token(), None);
        session.store_token("abc");
        assert_eq!(session.current_token(), Some("abc".to_string()));
    }

    #[test]
    fn no_autenticado_tras_clear() {
        let session = session_with("token=abc");
        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn auth_gate_discrimina_los_dos_casos() {
        assert_eq!(
            session_with("token=abc").auth_gate(),
            AuthGate::Authorized("abc".to_string())
        );
        assert_eq!(session_with("").auth_gate(), AuthGate::RedirectRequired);
    }
}
