use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use common::{BotController, Error, Result, Trade};

/// Production [`BotController`]: drives the external freqtrade executable
/// through its `status`, `trades`, `trade` and `stop` subcommands.
///
/// The gateway owns no bot state. Non-zero exits are passed through, not
/// interpreted; the executable reports its own failures on stdout or in
/// the export file. Only an unlaunchable subprocess is an error here.
pub struct FreqtradeCli {
    /// Name or path of the executable, resolved via `PATH` as usual.
    bin: String,
    /// Config file handed to `trade --config`.
    bot_config_path: PathBuf,
    /// File `trades --export` writes and `export_trades` reads back.
    trade_export_path: PathBuf,
}

impl FreqtradeCli {
    pub fn new(
        bin: impl Into<String>,
        bot_config_path: impl Into<PathBuf>,
        trade_export_path: impl Into<PathBuf>,
    ) -> Self {
        let bin = bin.into();
        info!(bin = %bin, "FreqtradeCli initialized");
        Self {
            bin,
            bot_config_path: bot_config_path.into(),
            trade_export_path: trade_export_path.into(),
        }
    }

    fn launch_error(&self, subcommand: &str, e: io::Error) -> Error {
        Error::Bot(format!("failed to launch {} {subcommand}: {e}", self.bin))
    }
}

#[async_trait]
impl BotController for FreqtradeCli {
    async fn status(&self) -> Result<String> {
        debug!(bin = %self.bin, "running status subcommand");
        let output = Command::new(&self.bin)
            .arg("status")
            .output()
            .await
            .map_err(|e| self.launch_error("status", e))?;
        // Exit code deliberately ignored; stdout is the answer either way.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn export_trades(&self) -> Result<Vec<Trade>> {
        debug!(bin = %self.bin, export = %self.trade_export_path.display(), "running trade export");
        let _ = Command::new(&self.bin)
            .args(["trades", "--export"])
            .arg(&self.trade_export_path)
            .output()
            .await
            .map_err(|e| self.launch_error("trades", e))?;

        // The subcommand's exit status and stderr are ignored: the export
        // file either exists or it doesn't.
        match tokio::fs::read(&self.trade_export_path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn start_trading(&self, strategy: &str) -> Result<()> {
        info!(strategy = %strategy, "launching detached trading process");
        let child = Command::new(&self.bin)
            .args(["trade", "--strategy", strategy, "--config"])
            .arg(&self.bot_config_path)
            .spawn()
            .map_err(|e| self.launch_error("trade", e))?;
        // Dropping the handle detaches the child; the runtime reaps it when
        // it eventually exits. Stdio is inherited, not captured.
        drop(child);
        Ok(())
    }

    async fn stop_trading(&self) -> Result<()> {
        info!(bin = %self.bin, "running stop subcommand");
        let status = Command::new(&self.bin)
            .arg("stop")
            .status()
            .await
            .map_err(|e| self.launch_error("stop", e))?;
        debug!(code = ?status.code(), "stop subcommand finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The tests drive FreqtradeCli against stock Unix binaries so that no
    // freqtrade installation is needed.

    #[tokio::test]
    async fn status_returns_captured_stdout() {
        let cli = FreqtradeCli::new("echo", "config.json", "trades.json");
        let status = cli.status().await.unwrap();
        // `echo status` prints its argument back.
        assert_eq!(status, "status\n");
    }

    #[tokio::test]
    async fn status_nonzero_exit_is_not_an_error() {
        let cli = FreqtradeCli::new("false", "config.json", "trades.json");
        let status = cli.status().await.unwrap();
        assert_eq!(status, "");
    }

    #[tokio::test]
    async fn status_missing_executable_is_a_bot_error() {
        let cli = FreqtradeCli::new("freqgate-no-such-binary", "config.json", "trades.json");
        let err = cli.status().await.unwrap_err();
        assert!(matches!(err, Error::Bot(_)), "got: {err}");
        assert!(err.to_string().starts_with("Bot process error:"));
    }

    #[tokio::test]
    async fn export_trades_without_export_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("trades.json");
        let cli = FreqtradeCli::new("true", "config.json", &export);

        let trades = cli.export_trades().await.unwrap();
        assert!(trades.is_empty());
    }

    #[tokio::test]
    async fn export_trades_reads_back_the_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("trades.json");
        std::fs::write(
            &export,
            r#"[{
                "pair": "BTC/USDT",
                "profit_ratio": 0.05,
                "profit_abs": 12.5,
                "open_date": "2024-01-01 00:00:00",
                "open_rate": 42000.0,
                "close_rate": 44100.0,
                "close_date": "2024-01-02 00:00:00",
                "amount": 0.01,
                "stake_amount": 420.0,
                "trade_duration": 1440,
                "is_open": false
            }]"#,
        )
        .unwrap();
        let cli = FreqtradeCli::new("true", "config.json", &export);

        let trades = cli.export_trades().await.unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].pair, "BTC/USDT");
        assert_eq!(trades[0].trade_duration, Some(1440));
        assert!(!trades[0].is_open);
    }

    #[tokio::test]
    async fn export_trades_malformed_json_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("trades.json");
        std::fs::write(&export, "{definitely not json").unwrap();
        let cli = FreqtradeCli::new("true", "config.json", &export);

        let err = cli.export_trades().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got: {err}");
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[tokio::test]
    async fn start_trading_is_fire_and_forget() {
        let cli = FreqtradeCli::new("true", "config.json", "trades.json");
        // `true MyStrategy ...` exits immediately with success; the call
        // must not care either way.
        cli.start_trading("MyStrategy").await.unwrap();
    }

    #[tokio::test]
    async fn start_trading_missing_executable_is_a_bot_error() {
        let cli = FreqtradeCli::new("freqgate-no-such-binary", "config.json", "trades.json");
        let err = cli.start_trading("MyStrategy").await.unwrap_err();
        assert!(matches!(err, Error::Bot(_)), "got: {err}");
    }

    #[tokio::test]
    async fn stop_trading_succeeds_regardless_of_exit_code() {
        let cli = FreqtradeCli::new("false", "config.json", "trades.json");
        cli.stop_trading().await.unwrap();
    }
}
