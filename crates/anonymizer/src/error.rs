//! Error types surfaced to operator callers.

use thiserror::Error;

/// Top-level operator error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnonymizerError {
    /// A supplied operator parameter failed validation.
    ///
    /// The payload is the full user-facing message, surfaced verbatim so
    /// callers can relay it without rewording.
    #[error("{0}")]
    InvalidParam(String),

    /// The underlying cipher rejected the operation for a reason other than
    /// parameter validation.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),
}

impl AnonymizerError {
    /// Construct an [`AnonymizerError::InvalidParam`] from any message.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        AnonymizerError::InvalidParam(message.into())
    }
}
