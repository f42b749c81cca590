use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /start`: which strategy the bot should run.
///
/// Only `name` is required. `config` is forwarded verbatim and never
/// validated beyond being a well-formed JSON mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}

/// One historical or open position as exported by the external bot.
///
/// A passthrough projection of whatever the export file contains: the
/// gateway deserializes and re-serializes these records without ever
/// constructing or mutating one. Dates stay strings end-to-end — parsing
/// them into a time type would mutate the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub pair: String,
    pub profit_ratio: f64,
    pub profit_abs: f64,
    pub open_date: String,
    #[serde(default)]
    pub close_date: Option<String>,
    pub open_rate: f64,
    #[serde(default)]
    pub close_rate: Option<f64>,
    pub amount: f64,
    pub stake_amount: f64,
    #[serde(default)]
    pub trade_duration: Option<i64>,
    pub is_open: bool,
}

/// One strategy source file found in the strategies directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyFile {
    /// Filename without extension.
    pub name: String,
    /// Filesystem path as enumerated.
    pub path: String,
}
