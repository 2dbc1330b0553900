// ============================================================================
// REVIEW FORM VIEWMODEL - Controlador del formulario de review
// ============================================================================
// En cada submit se consulta primero el gate de sesión: sin token se
// redirige a login SIN llamar al API (terminal para ese submit). Con token:
// submitting → éxito: panel de éxito + reset del form → idle
//            → fallo (red o HTTP): panel de error → idle
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, get_element_by_id, on_submit};
use crate::services::{ApiClient, AuthGate, SessionService};
use crate::utils::navigation::{self, LOGIN_PATH};
use crate::viewmodels::FormPhase;

pub struct ReviewFormViewModel {
    session: SessionService,
    api: ApiClient,
    place_id: String,
}

impl ReviewFormViewModel {
    pub fn new(session: SessionService, api: ApiClient, place_id: String) -> Self {
        Self {
            session,
            api,
            place_id,
        }
    }

    /// Conectar el submit del formulario #review-form
    pub fn attach(&self, form: &Element) -> Result<(), JsValue> {
        let session = self.session.clone();
        let api = self.api.clone();
        let place_id = self.place_id.clone();
        let form_el = form.clone();
        let phase = Rc::new(RefCell::new(FormPhase::Idle));

        on_submit(form, move |event: web_sys::Event| {
            event.prevent_default();

            // Gate de autenticación ANTES de tocar el API
            let token = match session.auth_gate() {
                AuthGate::Authorized(token) => token,
                AuthGate::RedirectRequired => {
                    log::warn!("🔒 Review sin sesión, redirigiendo a login");
                    navigation::navigate_to(LOGIN_PATH);
                    return;
                }
            };

            let text = dom::form_value("review").unwrap_or_default();
            let rating = coerce_rating(&dom::form_value("rating").unwrap_or_default());
            *phase.borrow_mut() = FormPhase::Submitting;

            let api = api.clone();
            let place_id = place_id.clone();
            let form_el = form_el.clone();
            let phase = phase.clone();
            spawn_local(async move {
                match api.create_review(&token, &place_id, &text, rating).await {
                    Ok(()) => {
                        *phase.borrow_mut() = FormPhase::Succeeded;
                        toggle_panels(true);
                        dom::reset_form(&form_el);
                        *phase.borrow_mut() = FormPhase::Idle;
                    }
                    Err(e) => {
                        *phase.borrow_mut() = FormPhase::Failed;
                        log::error!("❌ Error enviando review: {}", e);
                        toggle_panels(false);
                        *phase.borrow_mut() = FormPhase::Idle;
                    }
                }
            });
        })
    }
}

/// Coerción del rating del select a entero (como parseInt)
pub fn coerce_rating(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Mostrar el panel de éxito u ocultar el de error (o viceversa)
fn toggle_panels(success: bool) {
    for (id, visible) in [("success-message", success), ("error-message", !success)] {
        if let Some(panel) = get_element_by_id(id) {
            let display = if visible { "block" } else { "none" };
            if let Err(e) = dom::set_display(&panel, display) {
                log::warn!("⚠️ No se pudo togglear #{}: {:?}", id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_del_rating() {
        assert_eq!(coerce_rating("5"), 5);
        assert_eq!(coerce_rating(" 4 "), 4);
        assert_eq!(coerce_rating("abc"), 0);
        assert_eq!(coerce_rating(""), 0);
    }
}
