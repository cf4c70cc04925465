//! Cryptographic error types.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key generation failed (entropy source or primitive failure).
    ///
    /// Fatal to the invocation: a client with no identity cannot proceed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Public key could not be encoded to PEM.
    #[error("public key encoding failed: {0}")]
    KeyEncoding(String),

    /// Public key could not be parsed.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signing primitive failure.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Signature bytes are not a well-formed RSA signature.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// Signature verification failed.
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid base64 encoding.
    #[error("invalid base64 encoding")]
    InvalidBase64Encoding,
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
