use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid field `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, message } => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.to_string(), json!(message));
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": fields }))).into_response()
            }
        }
    }
}
