use std::path::PathBuf;

use qrng::error::QrngError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Qrng(#[from] QrngError),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}
