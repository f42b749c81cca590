use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bot process error: {0}")]
    Bot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
