//! Record-related error types.

use thiserror::Error;

/// Errors that can occur while building or checking audit records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Access type string did not match any known kind.
    #[error("unknown access type: {0:?} (expected READ, WRITE, UPDATE or DELETE)")]
    UnknownAccessKind(String),

    /// Invalid signature on a sealed envelope.
    #[error("invalid signature on record {req_id}")]
    InvalidSignature {
        /// Request ID of the record that failed verification.
        req_id: String,
    },

    /// Crypto error.
    #[error("crypto error: {0}")]
    CryptoError(#[from] scribe_crypto::CryptoError),
}

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
