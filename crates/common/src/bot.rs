use async_trait::async_trait;

use crate::{Result, Trade};

/// Abstraction over the external bot executable.
///
/// `FreqtradeCli` in `crates/botctl` implements this by shelling out to
/// the real program. HTTP handlers only ever see a `dyn BotController`,
/// so the route layer is testable without spawning processes.
#[async_trait]
pub trait BotController: Send + Sync {
    /// Run the status subcommand and return its captured stdout.
    /// A non-zero exit is not an error; only a failed launch is.
    async fn status(&self) -> Result<String>;

    /// Run the trade-export subcommand, then read back the export file.
    /// Returns an empty list when the file was not produced.
    async fn export_trades(&self) -> Result<Vec<Trade>>;

    /// Launch the bot detached with the given strategy. Fire-and-forget:
    /// the child is not awaited and its output is not captured.
    async fn start_trading(&self, strategy: &str) -> Result<()>;

    /// Run the stop subcommand to completion, discarding its output.
    async fn stop_trading(&self) -> Result<()>;
}
