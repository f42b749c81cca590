use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::AppState;
use botctl::FreqtradeCli;
use common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(bin = %cfg.freqtrade_bin, port = cfg.port, "FreqGate starting");

    let allowed_origin: HeaderValue = cfg
        .allowed_origin
        .parse()
        .with_context(|| format!("ALLOWED_ORIGIN is not a valid header value: '{}'", cfg.allowed_origin))?;

    // ── Bot controller ────────────────────────────────────────────────────────
    let bot = Arc::new(FreqtradeCli::new(
        cfg.freqtrade_bin.clone(),
        cfg.bot_config_path.clone(),
        cfg.trade_export_path.clone(),
    ));

    let state = AppState {
        bot,
        strategies_dir: cfg.strategies_dir.clone().into(),
    };

    // ── Serve ─────────────────────────────────────────────────────────────────
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Gateway API listening");

    axum::serve(listener, api::app(state, allowed_origin))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C. In-flight requests finish; detached bot processes
/// are deliberately left running — the gateway never owned them.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
