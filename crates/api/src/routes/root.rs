use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// Fixed greeting. Doubles as the liveness check for the frontend.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Freqtrade UI API" }))
}
