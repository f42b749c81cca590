use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// The single error→response translation point: anything a handler fails
/// with becomes `500` with a `{"detail": <message>}` body. Callers get the
/// underlying failure's text, nothing more structured.
pub struct ApiError(common::Error);

impl<E> From<E> for ApiError
where
    E: Into<common::Error>,
{
    fn from(e: E) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}
