//! Signed envelopes - the unit actually transmitted.

use scribe_crypto::{KeyPair, Signature};
use serde::{Deserialize, Serialize};

use crate::access::AccessKind;
use crate::error::{RecordError, RecordResult};
use crate::record::{ActorDescriptor, AuditRecord, FileDescriptor};

/// An audit record sealed with its signature.
///
/// Fields are private: an envelope is only built by signing, so it cannot
/// drift from its signature afterwards. Any change to the event requires
/// constructing and signing a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedEnvelope {
    #[serde(flatten)]
    record: AuditRecord,
    signature: Signature,
}

impl SignedEnvelope {
    /// Assemble a record for the given access event and sign it.
    ///
    /// The record is stamped with a fresh request id and timestamp and
    /// carries the key pair's public half; the signature covers the
    /// record's canonical payload.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::CryptoError`] if the signing primitive fails.
    pub fn create(
        file: FileDescriptor,
        actor: ActorDescriptor,
        access: AccessKind,
        keypair: &KeyPair,
    ) -> RecordResult<Self> {
        let record = AuditRecord::new(file, actor, access, keypair.public_key().clone());
        let signature = keypair.try_sign(&record.signing_data())?;

        tracing::debug!(
            req_id = %record.req_id,
            access = %record.access,
            fingerprint = %keypair.fingerprint(),
            "signed audit record"
        );

        Ok(Self { record, signature })
    }

    /// The signed record.
    #[must_use]
    pub fn record(&self) -> &AuditRecord {
        &self.record
    }

    /// The signature over the record's canonical payload.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Verify the envelope's signature against its embedded public key.
    ///
    /// Recomputes the canonical payload, so any mutation of a signable
    /// field since sealing makes this fail.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidSignature`] if the signature does not
    /// match the record contents.
    pub fn verify_signature(&self) -> RecordResult<()> {
        self.record
            .public_key
            .verify(&self.record.signing_data(), &self.signature)
            .map_err(|_| RecordError::InvalidSignature {
                req_id: self.record.req_id.clone(),
            })
    }
}
