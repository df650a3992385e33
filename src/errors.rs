use thiserror::Error;

/// Errors emitted by the fixture generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
