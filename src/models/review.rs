use serde::Serialize;

/// Review nueva construida desde el formulario (POST /api/v1/reviews/)
/// Se envía y no se guarda localmente
#[derive(Debug, Serialize)]
pub struct NewReview {
    pub text: String,
    pub rating: i32,
    pub place_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_review_serializa_rating_como_entero() {
        let review = NewReview {
            text: "Great stay".to_string(),
            rating: 5,
            place_id: "p1".to_string(),
        };
        let value = serde_json::to_value(&review).unwrap();
        assert!(value["rating"].is_i64());
        assert_eq!(value["rating"], 5);
        assert_eq!(value["place_id"], "p1");
    }
}
