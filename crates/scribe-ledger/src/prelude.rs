//! Prelude module - commonly used types for convenient import.
//!
//! Use `use scribe_ledger::prelude::*;` to import all essential types.

// Errors
pub use crate::{LedgerError, LedgerResult};

// Client and configuration
pub use crate::{LedgerClient, LedgerConfig};

// Wire types
pub use crate::{BlockHeader, SubmitReceipt, SubmitStatus};
