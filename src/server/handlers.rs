// Request handlers for the poem endpoint.

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::schema::request::{GenerationRequest, GenerationResponse};

/// Parse a request body; only text that is not JSON is rejected.
pub fn parse_body(body: &[u8]) -> ApiResult<GenerationRequest> {
    GenerationRequest::from_body(body).map_err(|e| ApiError::invalid_json(e.to_string()))
}

/// `POST /.netlify/functions/poem`
pub async fn poem_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<GenerationResponse>> {
    let request = parse_body(&body)?.to_poem_request();

    let mut rng = state.request_rng();
    let text = state.generator.generate(&request, &mut rng);

    info!(
        mood = %request.mood,
        food = %request.food,
        category = request.category().key(),
        style = ?request.style,
        lines = text.lines().count(),
        "generated poem"
    );

    Ok(Json(GenerationResponse { text }))
}

/// Any method other than POST on the poem route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Liveness check.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "served": state.requests_served(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), GenerationRequest::default());
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            parse_body(b"not json"),
            Err(ApiError::InvalidJson { .. })
        ));
        assert!(matches!(
            parse_body(b"{\"moodLabel\": "),
            Err(ApiError::InvalidJson { .. })
        ));
    }

    #[test]
    fn valid_json_of_any_shape_accepted() {
        let bodies: [&[u8]; 4] = [b"\"not json\"", b"null", b"[1,2]", b"{\"tone\":1}"];
        for body in bodies {
            assert!(parse_body(body).is_ok(), "{:?}", std::str::from_utf8(body));
        }
    }

    #[test]
    fn labels_extracted() {
        let req = parse_body(br#"{"moodLabel":"Tired","foodLabel":"Sushi"}"#).unwrap();
        assert_eq!(req.mood_label.as_deref(), Some("Tired"));
        assert_eq!(req.food_label.as_deref(), Some("Sushi"));
    }
}
