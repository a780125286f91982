use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Conversion(#[from] numerus::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
