//! RSA key pairs scoped to a single invocation.
//!
//! Provides key generation, signing, and public-key export for:
//! - Client identity (signs audit records before submission)
//! - Verifier compatibility (PEM export matches what the payload embeds)

use rand::rngs::OsRng;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use crate::signature::Signature;

/// An RSA key pair generated fresh for each process lifetime.
///
/// The pair is never persisted: drop it and the identity is gone.
pub struct KeyPair {
    signing_key: SigningKey<Sha256>,
    public: PublicKey,
}

impl KeyPair {
    /// Modulus size in bits. A floor, not a tunable.
    pub const KEY_BITS: usize = 2048;

    /// Generate a new random key pair from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyGeneration`] if the entropy source or the
    /// RSA primitive fails. There is no retry; the invocation aborts.
    pub fn generate() -> CryptoResult<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, Self::KEY_BITS)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        let public = PublicKey::from_rsa(private.to_public_key())?;

        tracing::debug!(fingerprint = %public.fingerprint(), "generated session key pair");

        Ok(Self {
            signing_key: SigningKey::new(private),
            public,
        })
    }

    /// The public half of this key pair.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Short fingerprint of the public key, for log lines.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        self.public.fingerprint()
    }

    /// Sign a message: SHA-256 digest, then RSA PKCS#1 v1.5.
    ///
    /// Deterministic given (key, message): signing the same payload twice
    /// yields the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Signing`] if the primitive fails.
    pub fn try_sign(&self, message: &[u8]) -> CryptoResult<Signature> {
        let sig = self
            .signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        Ok(Signature::from_bytes(sig.to_vec()))
    }

    /// Verify a signature (convenience method using our public key).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::SignatureVerificationFailed`] if verification fails.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> CryptoResult<()> {
        self.public.verify(message, signature)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}

/// A public key (safe to share, serialize, etc.).
///
/// Carries its canonical PEM rendering: `SubjectPublicKeyInfo`, LF line
/// endings. That exact string is what goes into the signed payload and
/// over the wire, so it must be deterministic for a given key.
#[derive(Clone)]
pub struct PublicKey {
    key: RsaPublicKey,
    pem: String,
}

impl PublicKey {
    pub(crate) fn from_rsa(key: RsaPublicKey) -> CryptoResult<Self> {
        let pem = key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::KeyEncoding(e.to_string()))?;
        Ok(Self { key, pem })
    }

    /// Parse from a PEM string.
    ///
    /// The stored rendering is re-encoded, so keys that arrive with CRLF
    /// line endings normalize to the canonical LF form.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidPublicKey`] if the PEM does not hold
    /// an RSA `SubjectPublicKeyInfo`.
    pub fn from_pem(pem: &str) -> CryptoResult<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Self::from_rsa(key)
    }

    /// The canonical PEM rendering.
    #[must_use]
    pub fn pem(&self) -> &str {
        &self.pem
    }

    /// Short fingerprint (first 8 bytes of the SHA-256 of the PEM, hex).
    ///
    /// Identifies a key in logs without dumping the whole PEM block.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.pem.as_bytes());
        hex::encode(&digest[..8])
    }

    /// Verify a signature against this public key.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedSignature`] if the signature bytes
    /// are not a well-formed RSA signature, or
    /// [`CryptoError::SignatureVerificationFailed`] if verification fails.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> CryptoResult<()> {
        signature.verify(message, self)
    }

    pub(crate) fn rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.pem == other.pem
    }
}

impl Eq for PublicKey {}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.fingerprint())
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pem)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.pem)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_pem(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;

    fn test_keypair() -> &'static KeyPair {
        static KP: OnceLock<KeyPair> = OnceLock::new();
        KP.get_or_init(|| KeyPair::generate().unwrap())
    }

    fn other_keypair() -> &'static KeyPair {
        static KP: OnceLock<KeyPair> = OnceLock::new();
        KP.get_or_init(|| KeyPair::generate().unwrap())
    }

    #[test]
    fn test_keypair_generation() {
        let kp1 = test_keypair();
        let kp2 = other_keypair();

        // Distinct keypairs expose distinct public keys
        assert_ne!(kp1.public_key(), kp2.public_key());
    }

    #[test]
    fn test_sign_verify() {
        let keypair = test_keypair();
        let message = b"hello world";

        let signature = keypair.try_sign(message).unwrap();
        assert!(keypair.verify(message, &signature).is_ok());

        // Wrong message fails
        assert!(keypair.verify(b"wrong", &signature).is_err());
    }

    #[test]
    fn test_signing_is_deterministic() {
        let keypair = test_keypair();
        let message = b"same payload";

        let first = keypair.try_sign(message).unwrap();
        let second = keypair.try_sign(message).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let message = b"cross-key";
        let signature = test_keypair().try_sign(message).unwrap();

        assert!(matches!(
            other_keypair().verify(message, &signature),
            Err(CryptoError::SignatureVerificationFailed)
        ));
    }

    #[test]
    fn test_pem_roundtrip() {
        let pk = test_keypair().public_key();

        let parsed = PublicKey::from_pem(pk.pem()).unwrap();
        assert_eq!(pk, &parsed);

        // Export is deterministic
        assert_eq!(pk.pem(), parsed.pem());
    }

    #[test]
    fn test_pem_shape() {
        let pem = test_keypair().public_key().pem().to_string();

        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert!(pem.trim_end().ends_with("-----END PUBLIC KEY-----"));
        assert!(!pem.contains('\r'));
    }

    #[test]
    fn test_fingerprint() {
        let pk = test_keypair().public_key();

        // 8 bytes = 16 hex chars, stable across calls
        assert_eq!(pk.fingerprint().len(), 16);
        assert_eq!(pk.fingerprint(), pk.fingerprint());
        assert_ne!(pk.fingerprint(), other_keypair().fingerprint());
    }

    #[test]
    fn test_invalid_pem_rejected() {
        let result = PublicKey::from_pem("-----BEGIN PUBLIC KEY-----\nnot a key\n-----END PUBLIC KEY-----\n");
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey(_))));
    }

    #[test]
    fn test_public_key_serde() {
        let pk = test_keypair().public_key();

        let json = serde_json::to_string(pk).unwrap();
        let decoded: PublicKey = serde_json::from_str(&json).unwrap();

        assert_eq!(pk, &decoded);
    }
}
