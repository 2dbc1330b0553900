// ============================================================================
// LOGIN FORM VIEWMODEL - Controlador del formulario de login
// ============================================================================
// idle → submitting (submit) → éxito: token a cookie + navegar a /home
//                            → fallo: alert y vuelta a idle
// Sin UI optimista y sin guard de doble submit (comportamiento heredado:
// un segundo submit en vuelo dispara un segundo request).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, on_submit};
use crate::services::{ApiClient, ApiError, SessionService};
use crate::utils::navigation::{self, HOME_PATH};
use crate::viewmodels::FormPhase;

const BAD_CREDENTIALS_MESSAGE: &str = "Login failed: Invalid email or password";
const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

pub struct LoginFormViewModel {
    session: SessionService,
    api: ApiClient,
}

impl LoginFormViewModel {
    pub fn new(session: SessionService, api: ApiClient) -> Self {
        Self { session, api }
    }

    /// Conectar el submit del formulario #login-form
    pub fn attach(&self, form: &Element) -> Result<(), JsValue> {
        let session = self.session.clone();
        let api = self.api.clone();
        let phase = Rc::new(RefCell::new(FormPhase::Idle));

        on_submit(form, move |event: web_sys::Event| {
            event.prevent_default();

            if *phase.borrow() == FormPhase::Submitting {
                // Doble submit: se registra pero no se bloquea
                log::warn!("⚠️ Submit de login con request en vuelo");
            }
            *phase.borrow_mut() = FormPhase::Submitting;

            let email = dom::form_value("email").unwrap_or_default();
            let password = dom::form_value("password").unwrap_or_default();

            let session = session.clone();
            let api = api.clone();
            let phase = phase.clone();
            spawn_local(async move {
                match api.login(&email, &password).await {
                    Ok(data) => {
                        *phase.borrow_mut() = FormPhase::Succeeded;
                        session.store_token(&data.access_token);
                        log::info!("✅ Login exitoso, navegando a home");
                        navigation::navigate_to(HOME_PATH);
                    }
                    Err(ApiError::Http(status)) => {
                        // Fallo de dominio: credenciales inválidas
                        *phase.borrow_mut() = FormPhase::Failed;
                        log::warn!("🔐 Login fallido: HTTP {}", status);
                        dom::alert(BAD_CREDENTIALS_MESSAGE);
                        *phase.borrow_mut() = FormPhase::Idle;
                    }
                    Err(e) => {
                        // Fallo de transporte o parseo
                        *phase.borrow_mut() = FormPhase::Failed;
                        log::error!("❌ Error durante el login: {}", e);
                        dom::alert(GENERIC_ERROR_MESSAGE);
                        *phase.borrow_mut() = FormPhase::Idle;
                    }
                }
            });
        })
    }
}
