use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const HEALTH_BODY: &str = "\"status\": \"up\"";

/// 200 with the list, or 204 with no body when nothing matched.
pub fn list<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_BODY)
}
