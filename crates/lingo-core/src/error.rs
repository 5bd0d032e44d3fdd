use crate::types::BackendId;

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// Only raised for an explicit per-call override; default resolution
    /// always ends at the naive backend.
    #[error("segmentation backend '{backend}' is unavailable")]
    BackendUnavailable { backend: BackendId },

    #[error("unknown segmentation backend: {0}")]
    UnknownBackend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
