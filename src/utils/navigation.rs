// ============================================================================
// NAVIGATION - Redirecciones y parseo del path actual
// ============================================================================

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

/// Navegar a otra página (side effect: window.location.href)
pub fn navigate_to(path: &str) {
    if let Some(win) = crate::dom::window() {
        if win.location().set_href(path).is_err() {
            log::error!("❌ No se pudo navegar a {}", path);
        }
    }
}

/// Path actual de la página (pathname)
pub fn current_path() -> String {
    crate::dom::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}

/// Extraer el ID del place desde el path (/place/{id} → último segmento)
pub fn place_id_from_path(path: &str) -> Option<String> {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_id_desde_path_de_detalle() {
        assert_eq!(
            place_id_from_path("/place/abc-123"),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn place_id_ignora_slash_final() {
        assert_eq!(
            place_id_from_path("/place/abc-123/"),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn place_id_vacio_para_raiz() {
        assert_eq!(place_id_from_path("/"), None);
        assert_eq!(place_id_from_path(""), None);
    }
}
