use store::StoreError;
use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors returned by the mock backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("session could not be saved: {0}")]
    Session(#[from] StoreError),
}
