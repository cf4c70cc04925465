//! RSA PKCS#1 v1.5 signatures.
//!
//! The transport encoding is base64 (standard alphabet): signatures travel
//! as a textual protocol field, never as raw bytes.

use rsa::pkcs1v15::{Signature as Pkcs1v15Signature, VerifyingKey};
use rsa::signature::Verifier;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

use crate::error::{CryptoError, CryptoResult};
use crate::keypair::PublicKey;

/// An RSA signature over a canonical payload (256 bytes for RSA-2048).
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Create from raw signature bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encode as base64 string.
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    /// Decode from base64 string.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidBase64Encoding`] if the string is not
    /// valid base64.
    pub fn from_base64(s: &str) -> CryptoResult<Self> {
        use base64::Engine;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(|_| CryptoError::InvalidBase64Encoding)?;
        Ok(Self(bytes))
    }

    /// Verify this signature against a message and public key.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedSignature`] if the bytes are not a
    /// well-formed RSA signature, or
    /// [`CryptoError::SignatureVerificationFailed`] if the payload was
    /// altered or the key does not match.
    pub fn verify(&self, message: &[u8], public_key: &PublicKey) -> CryptoResult<()> {
        let verifying_key = VerifyingKey::<Sha256>::new(public_key.rsa().clone());

        let sig = Pkcs1v15Signature::try_from(self.0.as_slice())
            .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;

        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(&self.0);
        write!(f, "Signature({}...)", &hex[..hex.len().min(16)])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
