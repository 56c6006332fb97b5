//! Error types for session messages.

/// Errors raised while decoding session messages.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Malformed session message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session script contains no events")]
    EmptyScript,
}
