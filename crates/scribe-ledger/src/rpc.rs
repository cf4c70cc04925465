//! JSON-RPC API definition for client ↔ ledger communication.
//!
//! Uses jsonrpsee proc macros to define the RPC interface. The ledger
//! service implements the server side; this crate ships the client side
//! (the server trait is exercised by the in-process test mocks).

use jsonrpsee::proc_macros::rpc;
use jsonrpsee::types::ErrorObjectOwned;
use scribe_record::SignedEnvelope;
use serde::{Deserialize, Serialize};

// ---------- Wire types ----------

/// Outcome reported by the ledger for a submission.
///
/// An enumerated value, not a free string: `"success"` or `"failure"` on
/// the wire. A failure receipt is a valid response: the ledger looked at
/// the record and rejected it (bad signature, invalid access type, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// The record was accepted and committed.
    Success,
    /// The ledger rejected the record; see the receipt's error message.
    Failure,
}

impl SubmitStatus {
    /// Whether this status reports a committed record.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Metadata identifying the block that committed a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Hash of the committing block.
    pub block_hash: String,
    /// Height of the committing block.
    pub block_number: u64,
    /// Block timestamp (seconds since epoch).
    pub timestamp: i64,
    /// Hash of the preceding block.
    pub previous_block_hash: String,
    /// Merkle root over the block's records.
    pub merkle_root: String,
}

/// The ledger's answer to a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Echo of the submitted request id.
    pub req_id: String,
    /// Transaction hash assigned by the ledger.
    pub tx_hash: String,
    /// Whether the record was committed or rejected.
    pub status: SubmitStatus,
    /// The peer's reason, present iff status is failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The committing block, present iff the record was committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockHeader>,
}

// ---------- RPC API ----------

/// The audit ledger RPC API.
///
/// Implemented by the ledger service (server side).
/// Called by the submitting client (client side).
#[rpc(server, client, namespace = "ledger")]
pub trait LedgerRpc {
    /// Submit a signed audit envelope for commitment.
    #[method(name = "submitAudit")]
    async fn submit_audit(
        &self,
        envelope: SignedEnvelope,
    ) -> Result<SubmitReceipt, ErrorObjectOwned>;
}
