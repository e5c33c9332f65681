use thiserror::Error;

/// Errors raised while reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("failed to write {key:?} to storage: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}
