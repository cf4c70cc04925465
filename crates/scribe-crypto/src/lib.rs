//! Scribe Crypto - key material and signatures for the audit client.
//!
//! This crate provides:
//! - RSA-2048 key pairs generated fresh per invocation
//! - SHA-256 + PKCS#1 v1.5 signatures over canonical audit payloads
//! - PEM (`SubjectPublicKeyInfo`) public-key export for the wire
//!
//! # Identity Model
//!
//! A key pair lives for exactly one process invocation. It is never
//! persisted and never reused, so every submission carries a fresh,
//! self-asserted identity. A verifier binds the signature to that
//! identity through the public key embedded in the signed payload.
//!
//! # Example
//!
//! ```
//! use scribe_crypto::KeyPair;
//!
//! let keypair = KeyPair::generate()?;
//!
//! let message = b"important data";
//! let signature = keypair.try_sign(message)?;
//!
//! assert!(keypair.public_key().verify(message, &signature).is_ok());
//! # Ok::<(), scribe_crypto::CryptoError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod keypair;
mod signature;

pub use error::{CryptoError, CryptoResult};
pub use keypair::{KeyPair, PublicKey};
pub use signature::Signature;
