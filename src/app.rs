// ============================================================================
// APP - Wiring por página
// ============================================================================
// El mismo bundle corre en todas las páginas (login, index, detalle); cada
// controlador se activa solo si su elemento existe en el DOM:
//   #login-form      → LoginFormViewModel
//   #places-list     → fetch + render del listado, filtro de precio
//   #place-details   → fetch + render del detalle (id desde /place/{id})
//   #review-form     → ReviewFormViewModel
//   #login-button    → toggle de visibilidad según sesión
//   #logout-button   → logout (borrar cookie + volver a login)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_click};
use crate::services::{ApiClient, SessionService};
use crate::utils::navigation::{current_path, place_id_from_path};
use crate::viewmodels::{LoginFormViewModel, ReviewFormViewModel};
use crate::views::{
    populate_price_filter, render_place_details, render_places, setup_price_filter,
};

pub struct App {
    session: SessionService,
    api: ApiClient,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: SessionService::browser(),
            api: ApiClient::new(),
        }
    }

    /// Activar los controladores de la página actual
    pub fn run(&self) -> Result<(), JsValue> {
        self.session.update_login_button()?;

        if let Some(logout_button) = get_element_by_id("logout-button") {
            let session = self.session.clone();
            on_click(&logout_button, move |_e: web_sys::MouseEvent| {
                session.logout();
            })?;
        }

        if let Some(login_form) = get_element_by_id("login-form") {
            LoginFormViewModel::new(self.session.clone(), self.api.clone())
                .attach(&login_form)?;
        }

        if get_element_by_id("places-list").is_some() {
            self.run_index_page()?;
        }

        if get_element_by_id("place-details").is_some() {
            self.run_details_page();
        }

        if let Some(review_form) = get_element_by_id("review-form") {
            match place_id_from_path(&current_path()) {
                Some(place_id) => {
                    ReviewFormViewModel::new(self.session.clone(), self.api.clone(), place_id)
                        .attach(&review_form)?;
                }
                None => log::warn!("⚠️ #review-form sin place id en el path"),
            }
        }

        Ok(())
    }

    /// Página index: filtro + fetch del listado (token opcional)
    fn run_index_page(&self) -> Result<(), JsValue> {
        populate_price_filter()?;
        setup_price_filter()?;

        let api = self.api.clone();
        let token = self.session.current_token();
        spawn_local(async move {
            match api.list_places(token.as_deref()).await {
                Ok(places) => {
                    if let Err(e) = render_places(&places) {
                        log::error!("❌ Error renderizando places: {:?}", e);
                    }
                }
                Err(e) => log::error!("❌ Error obteniendo places: {}", e),
            }
        });
        Ok(())
    }

    /// Página de detalle: fetch + render del place del path
    fn run_details_page(&self) {
        let Some(place_id) = place_id_from_path(&current_path()) else {
            log::warn!("⚠️ #place-details sin place id en el path");
            return;
        };

        let api = self.api.clone();
        spawn_local(async move {
            match api.get_place_detail(&place_id).await {
                Ok(place) => {
                    if let Err(e) = render_place_details(&place) {
                        log::error!("❌ Error renderizando detalle: {:?}", e);
                    }
                }
                Err(e) => log::error!("❌ Error obteniendo detalle del place: {}", e),
            }
        });
    }
}
