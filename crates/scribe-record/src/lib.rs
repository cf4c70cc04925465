//! Scribe Record - audit records and signed envelopes.
//!
//! This crate provides:
//! - The audit record describing a file-access event (who, which file, how, when)
//! - A versioned canonical encoding of the record's fields for signing
//! - Signed envelopes: a record sealed with its signature, ready to transmit
//!
//! # Signing Model
//!
//! The canonical payload covers every field of the record, including the
//! submitter's public key, and is computed the same way by signer and
//! verifier. The signature itself is never part of what it signs. An
//! envelope cannot be altered after sealing; changing anything means
//! building and signing a new record.
//!
//! # Example
//!
//! ```
//! use scribe_crypto::KeyPair;
//! use scribe_record::{AccessKind, ActorDescriptor, FileDescriptor, SignedEnvelope};
//!
//! let keypair = KeyPair::generate()?;
//!
//! let envelope = SignedEnvelope::create(
//!     FileDescriptor::new("f1", "report.pdf"),
//!     ActorDescriptor::new("u1", "alice"),
//!     AccessKind::Write,
//!     &keypair,
//! )?;
//!
//! assert!(envelope.verify_signature().is_ok());
//! # Ok::<(), scribe_record::RecordError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod access;
mod envelope;
mod error;
mod record;

pub use access::AccessKind;
pub use envelope::SignedEnvelope;
pub use error::{RecordError, RecordResult};
pub use record::{ActorDescriptor, AuditRecord, FileDescriptor};
