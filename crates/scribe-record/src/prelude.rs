//! Prelude module - commonly used types for convenient import.
//!
//! Use `use scribe_record::prelude::*;` to import all essential types.

// Errors
pub use crate::{RecordError, RecordResult};

// Record types
pub use crate::{AccessKind, ActorDescriptor, AuditRecord, FileDescriptor};

// Envelope
pub use crate::SignedEnvelope;
