use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use common::Trade;

use crate::{ApiError, AppState};

pub fn trades_router() -> Router<AppState> {
    Router::new().route("/trades", get(get_trades))
}

/// Re-export whatever the bot last wrote: the controller runs the export
/// subcommand, reads the file back, and the records pass through untouched.
async fn get_trades(State(state): State<AppState>) -> Result<Json<Vec<Trade>>, ApiError> {
    let trades = state.bot.export_trades().await?;
    debug!(count = trades.len(), "trade export served");
    Ok(Json(trades))
}
