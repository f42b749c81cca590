pub mod bot;
pub mod config;
pub mod error;
pub mod types;

pub use bot::BotController;
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
