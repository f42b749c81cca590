use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use common::StrategyDescriptor;

use crate::{ApiError, AppState};

pub fn bot_router() -> Router<AppState> {
    Router::new()
        .route("/status", get(get_status))
        .route("/start", post(start_trading))
        .route("/stop", post(stop_trading))
}

async fn get_status(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let status = state.bot.status().await?;
    Ok(Json(json!({ "status": status })))
}

/// Fire-and-forget: the bot is launched detached and the call returns
/// immediately. Nothing checks whether trading is already running — a
/// second call spawns a second bot process.
async fn start_trading(
    State(state): State<AppState>,
    Json(strategy): Json<StrategyDescriptor>,
) -> Result<Json<Value>, ApiError> {
    info!(strategy = %strategy.name, "start trading requested");
    state.bot.start_trading(&strategy.name).await?;
    Ok(Json(json!({ "message": "Trading started successfully" })))
}

async fn stop_trading(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    info!("stop trading requested");
    state.bot.stop_trading().await?;
    Ok(Json(json!({ "message": "Trading stopped successfully" })))
}
