//! Prelude module - commonly used types for convenient import.
//!
//! Use `use scribe_crypto::prelude::*;` to import all essential types.

// Errors
pub use crate::{CryptoError, CryptoResult};

// Key material
pub use crate::{KeyPair, PublicKey};

// Signatures
pub use crate::Signature;
