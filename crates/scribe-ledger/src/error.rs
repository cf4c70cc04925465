//! Ledger-related error types.
//!
//! The taxonomy keeps failure classes apart: an unreachable peer is not an
//! expired deadline, and neither is a peer that answered with a rejection
//! (which is not an error at all; it comes back as receipt data).

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while submitting to the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Could not establish a connection to the peer.
    #[error("ledger peer unreachable at {url}: {reason}")]
    Unreachable {
        /// The URL the connection was attempted against.
        url: String,
        /// Underlying transport reason.
        reason: String,
    },

    /// The request deadline expired before the peer answered.
    ///
    /// The in-flight call is aborted; nothing waits past the deadline.
    #[error("submission deadline of {}s exceeded", .timeout.as_secs())]
    DeadlineExceeded {
        /// The deadline that was applied.
        timeout: Duration,
    },

    /// The peer answered with a JSON-RPC protocol error.
    ///
    /// Distinct from an application-level failure receipt: this means the
    /// call itself failed, not that the ledger rejected the record.
    #[error("ledger rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i32,
        /// Error message from the peer.
        message: String,
    },

    /// The connection failed mid-call.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
