// ============================================================================
// PLACE DETAILS VIEW - Detalle de un place + reviews
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{PlaceDetail, Review};

/// Mensaje para el estado vacío de reviews
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet.";

pub fn host_label(place: &PlaceDetail) -> String {
    format!("Host: {} {}", place.owner.first_name, place.owner.last_name)
}

pub fn rating_label(rating: i32) -> String {
    format!("Rating: {} Stars", rating)
}

/// Renderizar el detalle completo. Reemplaza el contenido anterior de los
/// contenedores de detalle y de reviews.
pub fn render_place_details(place: &PlaceDetail) -> Result<(), JsValue> {
    if let Some(section) = get_element_by_id("place-details") {
        set_inner_html(&section, "");

        let info = ElementBuilder::new("div")?.class("place-info").build();

        let title = ElementBuilder::new("h1")?.text(&place.title).build();
        let host = ElementBuilder::new("p")?.text(&host_label(place)).build();
        let price = ElementBuilder::new("p")?
            .class("place-price")
            .text(&crate::views::place_list::format_price(place.price))
            .build();
        let description = ElementBuilder::new("p")?.text(&place.description).build();

        append_child(&info, &title)?;
        append_child(&info, &host)?;
        append_child(&info, &price)?;
        append_child(&info, &description)?;

        let amenities_title = ElementBuilder::new("h3")?.text("Amenities:").build();
        let amenities_list = ElementBuilder::new("ul")?.build();
        for amenity in &place.amenities {
            let item = ElementBuilder::new("li")?.text(&amenity.name).build();
            append_child(&amenities_list, &item)?;
        }
        append_child(&info, &amenities_title)?;
        append_child(&info, &amenities_list)?;

        append_child(&section, &info)?;
    }

    render_reviews(&place.reviews)
}

/// Renderizar la sección de reviews, o el mensaje de estado vacío
pub fn render_reviews(reviews: &[Review]) -> Result<(), JsValue> {
    let Some(section) = get_element_by_id("reviews") else {
        return Ok(());
    };
    set_inner_html(&section, "");

    let heading = ElementBuilder::new("h2")?.text("Reviews").build();
    append_child(&section, &heading)?;

    if reviews.is_empty() {
        let empty = ElementBuilder::new("p")?.text(NO_REVIEWS_MESSAGE).build();
        append_child(&section, &empty)?;
        return Ok(());
    }

    for review in reviews {
        let text = ElementBuilder::new("p")?.text(&review.text).build();
        let rating = ElementBuilder::new("p")?
            .text(&rating_label(review.rating))
            .build();
        let card = ElementBuilder::new("div")?
            .class("review-card")
            .child(text)?
            .child(rating)?
            .build();
        append_child(&section, &card)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    #[test]
    fn etiqueta_del_host() {
        let place = PlaceDetail {
            id: "p1".to_string(),
            title: "Loft".to_string(),
            price: 10.0,
            description: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            owner: Owner {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
            amenities: vec![],
            reviews: vec![],
        };
        assert_eq!(host_label(&place), "Host: Ada Lovelace");
    }

    #[test]
    fn etiqueta_del_rating() {
        assert_eq!(rating_label(5), "Rating: 5 Stars");
        assert_eq!(rating_label(1), "Rating: 1 Stars");
    }
}
