// ============================================================================
// PLACE MODELS - Estructuras compartidas con el backend (solo lectura)
// ============================================================================

use serde::Deserialize;

/// Resumen de un place para el listado (GET /api/v1/places)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Detalle completo de un place (GET /api/v1/places/{id})
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceDetail {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub owner: Owner,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Amenity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub text: String,
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializar_resumen_de_place() {
        let json = r#"{
            "id": "p1",
            "title": "Cozy Loft",
            "price": 42.5,
            "description": "Nice view",
            "latitude": 48.85,
            "longitude": 2.35
        }"#;
        let place: PlaceSummary = serde_json::from_str(json).unwrap();
        assert_eq!(place.title, "Cozy Loft");
        assert_eq!(place.price, 42.5);
    }

    #[test]
    fn deserializar_detalle_sin_reviews() {
        let json = r#"{
            "id": "p1",
            "title": "Cozy Loft",
            "price": 42.5,
            "description": "Nice view",
            "owner": {"first_name": "Ada", "last_name": "Lovelace"},
            "amenities": [{"name": "WiFi"}],
            "reviews": []
        }"#;
        let place: PlaceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(place.owner.first_name, "Ada");
        assert_eq!(place.amenities.len(), 1);
        assert!(place.reviews.is_empty());
    }

    #[test]
    fn deserializar_detalle_con_reviews() {
        let json = r#"{
            "id": "p1",
            "title": "Cozy Loft",
            "price": 10,
            "owner": {"first_name": "Ada", "last_name": "Lovelace"},
            "reviews": [{"text": "Great", "rating": 5}]
        }"#;
        let place: PlaceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(place.reviews[0].text, "Great");
        assert_eq!(place.reviews[0].rating, 5);
    }
}
