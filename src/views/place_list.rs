// ============================================================================
// PLACE LIST VIEW - Listado de places + filtro de precio
// ============================================================================
// El filtro opera sobre los cards YA renderizados (view-layer filter, nunca
// re-consulta el API). El precio viaja en el atributo data-price del card;
// el texto "Price: $N" es solo una vista derivada del mismo valor.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{
    self, append_child, get_element_by_id, on_change, on_click, query_selector_all,
    set_inner_html, ElementBuilder,
};
use crate::models::PlaceSummary;
use crate::utils::navigation;

/// Valor sentinel del select para "mostrar todo"
pub const FILTER_ALL: &str = "all";

/// Opciones fijas del filtro como pares (value, label)
pub fn price_filter_options() -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = [10, 50, 100]
        .iter()
        .map(|price| (price.to_string(), format!("${}", price)))
        .collect();
    options.push((FILTER_ALL.to_string(), "All".to_string()));
    options
}

/// Texto visible del precio en el card
pub fn format_price(price: f64) -> String {
    format!("Price: ${}", price)
}

/// Decisión pura del filtro: visible si selection es "all" o price <= umbral
pub fn price_passes(price: f64, selection: &str) -> bool {
    if selection == FILTER_ALL {
        return true;
    }
    match selection.parse::<f64>() {
        Ok(threshold) => price <= threshold,
        // Selección no numérica: mismo comportamiento que price <= NaN
        Err(_) => false,
    }
}

/// Leer el precio estructurado de un card ya renderizado
pub fn card_price(card: &Element) -> Option<f64> {
    dom::get_attribute(card, "data-price")?.parse().ok()
}

/// Renderizar el listado completo. Idempotente: reemplaza todo el contenido
/// anterior del contenedor (sin diffing).
pub fn render_places(places: &[PlaceSummary]) -> Result<(), JsValue> {
    let Some(container) = get_element_by_id("places-list") else {
        return Ok(());
    };
    set_inner_html(&container, "");

    for place in places {
        let card = build_place_card(place)?;
        append_child(&container, &card)?;
    }

    log::info!("🏠 {} cards renderizados", places.len());
    Ok(())
}

fn build_place_card(place: &PlaceSummary) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("place-card")
        .attr("data-price", &place.price.to_string())?
        .build();

    let title = ElementBuilder::new("h3")?.text(&place.title).build();
    let price = ElementBuilder::new("p")?
        .class("place-price")
        .text(&format_price(place.price))
        .build();

    let details_button = ElementBuilder::new("button")?
        .class("view-details-button")
        .attr("data-id", &place.id)?
        .text("View Details")
        .build();

    {
        let place_id = place.id.clone();
        on_click(&details_button, move |_e: web_sys::MouseEvent| {
            navigation::navigate_to(&format!("/place/{}", place_id));
        })?;
    }

    append_child(&card, &title)?;
    append_child(&card, &price)?;
    append_child(&card, &details_button)?;

    Ok(card)
}

/// Poblar el select del filtro con las opciones fijas {10, 50, 100, All}.
/// Solo agrega opciones si el select está vacío.
pub fn populate_price_filter() -> Result<(), JsValue> {
    let Some(select) = get_element_by_id("price-filter") else {
        return Ok(());
    };
    if select.child_element_count() > 0 {
        return Ok(());
    }

    for (value, label) in price_filter_options() {
        let option = ElementBuilder::new("option")?
            .attr("value", &value)?
            .text(&label)
            .build();
        append_child(&select, &option)?;
    }
    Ok(())
}

/// Conectar el change del select con el filtro
pub fn setup_price_filter() -> Result<(), JsValue> {
    let Some(select) = get_element_by_id("price-filter") else {
        return Ok(());
    };

    let select_el = select.clone();
    on_change(&select, move |_e: web_sys::Event| {
        let selection = select_el
            .dyn_ref::<HtmlSelectElement>()
            .map(|s| s.value())
            .unwrap_or_default();
        if let Err(e) = apply_price_filter(&selection) {
            log::error!("❌ Error aplicando filtro de precio: {:?}", e);
        }
    })
}

/// Aplicar el filtro sobre los cards ya renderizados, toggling display
pub fn apply_price_filter(selection: &str) -> Result<(), JsValue> {
    let cards = query_selector_all(".place-card")?;

    for card in cards.iter() {
        let Ok(element) = card.dyn_into::<Element>() else {
            continue;
        };
        // Card sin precio legible: se deja visible
        let visible = card_price(&element)
            .map(|price| price_passes(price, selection))
            .unwrap_or(true);
        dom::set_display(&element, if visible { "block" } else { "none" })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtro_en_50_deja_pasar_10_y_50_pero_no_100() {
        assert!(price_passes(10.0, "50"));
        assert!(price_passes(50.0, "50"));
        assert!(!price_passes(100.0, "50"));
    }

    #[test]
    fn sentinel_all_muestra_todo() {
        for price in [10.0, 50.0, 100.0, 9999.0] {
            assert!(price_passes(price, FILTER_ALL));
        }
    }

    #[test]
    fn seleccion_invalida_oculta_el_card() {
        assert!(!price_passes(10.0, "no-numerico"));
    }

    #[test]
    fn formato_del_precio_visible() {
        assert_eq!(format_price(10.0), "Price: $10");
        assert_eq!(format_price(49.5), "Price: $49.5");
    }

    #[test]
    fn el_texto_del_precio_se_deriva_del_mismo_valor() {
        // El filtro lee data-price, pero el texto debe seguir parseable
        // con el prefijo "Price: $" (comportamiento observable original)
        let text = format_price(42.0);
        let parsed: f64 = text.replace("Price: $", "").parse().unwrap();
        assert_eq!(parsed, 42.0);
    }

    #[test]
    fn opciones_fijas_del_filtro() {
        let options = price_filter_options();
        assert_eq!(
            options,
            vec![
                ("10".to_string(), "$10".to_string()),
                ("50".to_string(), "$50".to_string()),
                ("100".to_string(), "$100".to_string()),
                ("all".to_string(), "All".to_string()),
            ]
        );
    }
}
