/// All configuration loaded from environment variables at startup.
/// Every setting has a default matching a conventional freqtrade working
/// directory, so a bare run works with no variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the gateway listens on (`0.0.0.0`).
    pub port: u16,

    /// Name or path of the external bot executable.
    pub freqtrade_bin: String,

    /// Directory scanned for strategy source files.
    pub strategies_dir: String,

    /// Config file path passed to `freqtrade trade --config`.
    pub bot_config_path: String,

    /// Path the trade-export subcommand writes to and the gateway reads back.
    pub trade_export_path: String,

    /// The one origin allowed cross-origin access (the dashboard frontend).
    pub allowed_origin: String,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        Config {
            port: optional_env("GATEWAY_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            freqtrade_bin: optional_env("FREQTRADE_BIN")
                .unwrap_or_else(|| "freqtrade".to_string()),
            strategies_dir: optional_env("STRATEGIES_DIR")
                .unwrap_or_else(|| "user_data/strategies".to_string()),
            bot_config_path: optional_env("BOT_CONFIG_PATH")
                .unwrap_or_else(|| "config.json".to_string()),
            trade_export_path: optional_env("TRADE_EXPORT_PATH")
                .unwrap_or_else(|| "trades.json".to_string()),
            allowed_origin: optional_env("ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
