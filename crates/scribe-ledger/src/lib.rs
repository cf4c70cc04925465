//! Scribe Ledger - JSON-RPC contract and client for the audit ledger.
//!
//! This crate provides:
//! - The wire contract with the ledger peer (`#[rpc]` trait + wire types)
//! - A submitting client with a bounded request deadline
//! - An error taxonomy that keeps transport failures, deadline expiry, and
//!   peer-side rejection distinct
//!
//! # Submission Model
//!
//! One request/response round trip per invocation, no retry. A peer that
//! answers with a failure status has still answered: that receipt is
//! returned as data, with the peer's reason attached. Only an unreachable
//! peer, an expired deadline, or a protocol-level error surface as
//! [`LedgerError`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod client;
mod config;
mod error;
pub mod rpc;

pub use client::LedgerClient;
pub use config::{DEFAULT_ADDR, DEFAULT_REQUEST_TIMEOUT, LedgerConfig};
pub use error::{LedgerError, LedgerResult};
pub use rpc::{BlockHeader, SubmitReceipt, SubmitStatus};
