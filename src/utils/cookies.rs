// ============================================================================
// COOKIES - Adaptador del cookie string del navegador
// ============================================================================
// El acceso al cookie string es un port inyectable (CookieStore) para poder
// sustituirlo por un fake en memoria en los tests. El parseo es una función
// pura sobre el string "a=1; b=2".
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Port de acceso al cookie string ambiente
pub trait CookieStore {
    /// Lee el cookie string completo ("a=1; b=2"), vacío si no hay cookies
    fn read(&self) -> String;
    /// Escribe una entrada de cookie ("name=value; path=/; ...")
    /// Best effort: el éxito de la escritura no es verificable
    fn write(&self, cookie: &str);
}

/// Implementación real sobre document.cookie
pub struct BrowserCookies;

impl CookieStore for BrowserCookies {
    fn read(&self) -> String {
        crate::dom::document()
            .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn write(&self, cookie: &str) {
        let html_doc = crate::dom::document().and_then(|doc| doc.dyn_into::<HtmlDocument>().ok());
        match html_doc {
            Some(doc) => {
                if doc.set_cookie(cookie).is_err() {
                    log::warn!("🍪 No se pudo escribir la cookie");
                }
            }
            None => log::warn!("🍪 No hay document para escribir cookies"),
        }
    }
}

/// Parsear el cookie string y obtener el valor de una cookie por nombre.
/// Retorna el primer match; None si no existe el par (incluido string vacío).
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Jar de cookies: operaciones get/set/clear sobre el port inyectado
#[derive(Clone)]
pub struct CookieJar {
    store: Rc<dyn CookieStore>,
}

impl CookieJar {
    pub fn new(store: Rc<dyn CookieStore>) -> Self {
        Self { store }
    }

    /// Jar sobre document.cookie real
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserCookies))
    }

    pub fn get(&self, name: &str) -> Option<String> {
        cookie_value(&self.store.read(), name)
    }

    /// Guarda la cookie en el path raíz, sin expiry (vida de sesión)
    pub fn set(&self, name: &str, value: &str) {
        self.store.write(&format!("{}={}; path=/", name, value));
    }

    /// Borra la cookie escribiendo una entrada ya expirada en el path raíz
    pub fn clear(&self, name: &str) {
        self.store.write(&format!(
            "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 UTC;",
            name
        ));
    }
}

#[cfg(test)]
pub mod testing {
    use super::CookieStore;
    use std::cell::RefCell;

    /// Fake en memoria que emula la semántica del navegador:
    /// escribir una entrada expirada elimina el par.
    #[derive(Default)]
    pub struct MemoryCookies {
        pairs: RefCell<Vec<(String, String)>>,
    }

    impl MemoryCookies {
        pub fn with_raw(raw: &str) -> Self {
            let store = Self::default();
            for pair in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
                if let Some((key, value)) = pair.split_once('=') {
                    store.pairs.borrow_mut().push((key.to_string(), value.to_string()));
                }
            }
            store
        }
    }

    impl CookieStore for MemoryCookies {
        fn read(&self) -> String {
            self.pairs
                .borrow()
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ")
        }

        fn write(&self, cookie: &str) {
            let entry = cookie.split(';').next().unwrap_or_default();
            let (name, value) = entry.split_once('=').unwrap_or((entry, ""));
            let expired = cookie.contains("expires=Thu, 01 Jan 1970");

            let mut pairs = self.pairs.borrow_mut();
            pairs.retain(|(k, _)| k != name);
            if !expired {
                pairs.push((name.to_string(), value.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryCookies;
    use super::*;

    #[test]
    fn cookie_value_con_un_solo_par() {
        assert_eq!(cookie_value("token=abc", "token"), Some("abc".to_string()));
    }

    #[test]
    fn cookie_value_entre_varios_pares() {
        let raw = "lang=es; token=xyz123; theme=dark";
        assert_eq!(cookie_value(raw, "token"), Some("xyz123".to_string()));
    }

    #[test]
    fn cookie_value_retorna_el_primer_match() {
        let raw = "token=primero; token=segundo";
        assert_eq!(cookie_value(raw, "token"), Some("primero".to_string()));
    }

    #[test]
    fn cookie_value_ausente() {
        assert_eq!(cookie_value("lang=es; theme=dark", "token"), None);
        assert_eq!(cookie_value("", "token"), None);
    }

    #[test]
    fn cookie_value_no_confunde_sufijos() {
        // "mytoken" no debe matchear "token"
        assert_eq!(cookie_value("mytoken=abc", "token"), None);
    }

    #[test]
    fn jar_set_y_get() {
        let jar = CookieJar::new(std::rc::Rc::new(MemoryCookies::default()));
        jar.set("token", "abc");
        assert_eq!(jar.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn jar_clear_elimina_la_cookie() {
        let jar = CookieJar::new(std::rc::Rc::new(MemoryCookies::with_raw("token=abc; lang=es")));
        jar.clear("token");
        assert_eq!(jar.get("token"), None);
        // Las demás cookies no se tocan
        assert_eq!(jar.get("lang"), Some("es".to_string()));
    }
}
