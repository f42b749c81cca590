mod error;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use common::BotController;

pub use error::ApiError;

/// Shared application state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    /// Capability handle over the external bot executable.
    pub bot: Arc<dyn BotController>,
    /// Directory scanned by `GET /strategies`.
    pub strategies_dir: PathBuf,
}

/// Build the gateway router.
///
/// Cross-origin access is granted to exactly one origin (the dashboard
/// frontend), with credentials. Credentialed CORS forbids wildcards, so
/// "all methods and headers" is implemented by mirroring the preflight.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .merge(routes::root_router())
        .merge(routes::strategies_router())
        .merge(routes::trades_router())
        .merge(routes::bot_router())
        .with_state(state)
        .layer(cors)
}
