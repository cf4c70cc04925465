//! The audit record and its canonical signing payload.

use chrono::Utc;
use scribe_crypto::PublicKey;
use serde::{Deserialize, Serialize};

use crate::access::AccessKind;

/// Domain tag prefixed to every canonical payload.
///
/// Versioned so the encoding can evolve without silently breaking
/// cross-version signature verification.
const SIGNING_DOMAIN: &[u8] = b"scribe-audit.v1";

/// Prefix for generated request identifiers.
const REQ_ID_PREFIX: &str = "req_";

/// The file a record is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File identifier.
    pub id: String,
    /// File name.
    pub name: String,
}

impl FileDescriptor {
    /// Create a new file descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The user who performed the access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDescriptor {
    /// User identifier.
    pub id: String,
    /// User name.
    pub name: String,
}

impl ActorDescriptor {
    /// Create a new actor descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single file-access audit record, prior to signing.
///
/// Every field here is part of the signed payload. The signature itself
/// lives in [`SignedEnvelope`](crate::SignedEnvelope), never in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique request identifier (`req_` + nanosecond clock reading).
    pub req_id: String,
    /// The file that was accessed.
    pub file: FileDescriptor,
    /// The user who accessed it.
    pub actor: ActorDescriptor,
    /// How the file was accessed.
    #[serde(rename = "access_type")]
    pub access: AccessKind,
    /// Seconds since epoch, assigned at record construction.
    pub timestamp: i64,
    /// Public key of the submitting identity.
    pub public_key: PublicKey,
}

impl AuditRecord {
    /// Build a record for an access event, stamping the request id and
    /// timestamp from the current clock.
    #[must_use]
    pub fn new(
        file: FileDescriptor,
        actor: ActorDescriptor,
        access: AccessKind,
        public_key: PublicKey,
    ) -> Self {
        let now = Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis().saturating_mul(1_000_000));

        Self {
            req_id: format!("{REQ_ID_PREFIX}{nanos}"),
            file,
            actor,
            access,
            timestamp: now.timestamp(),
            public_key,
        }
    }

    /// Get the canonical payload used for signing.
    ///
    /// A total, deterministic function of the record's fields: a versioned
    /// domain tag, then each field length-prefixed (u64 big-endian) in a
    /// fixed order, with the timestamp as 8 big-endian bytes. The length
    /// prefixes make the encoding injective: no two distinguishable
    /// records share a payload, even across field boundaries.
    #[must_use]
    pub fn signing_data(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(SIGNING_DOMAIN);
        put_field(&mut data, self.req_id.as_bytes());
        put_field(&mut data, self.file.id.as_bytes());
        put_field(&mut data, self.file.name.as_bytes());
        put_field(&mut data, self.actor.id.as_bytes());
        put_field(&mut data, self.actor.name.as_bytes());
        put_field(&mut data, self.access.as_str().as_bytes());
        data.extend_from_slice(&self.timestamp.to_be_bytes());
        put_field(&mut data, self.public_key.pem().as_bytes());
        data
    }
}

fn put_field(buf: &mut Vec<u8>, bytes: &[u8]) {
    let len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use scribe_crypto::KeyPair;

    use super::*;

    fn test_keypair() -> &'static KeyPair {
        static KP: OnceLock<KeyPair> = OnceLock::new();
        KP.get_or_init(|| KeyPair::generate().unwrap())
    }

    fn test_record() -> AuditRecord {
        AuditRecord {
            req_id: "req_1700000000000000000".to_string(),
            file: FileDescriptor::new("f1", "report.pdf"),
            actor: ActorDescriptor::new("u1", "alice"),
            access: AccessKind::Write,
            timestamp: 1_700_000_000,
            public_key: test_keypair().public_key().clone(),
        }
    }

    #[test]
    fn test_req_id_format() {
        let record = AuditRecord::new(
            FileDescriptor::new("f1", "report.pdf"),
            ActorDescriptor::new("u1", "alice"),
            AccessKind::Read,
            test_keypair().public_key().clone(),
        );

        let suffix = record.req_id.strip_prefix("req_").unwrap();
        assert!(suffix.parse::<i64>().unwrap() > 0);
        assert!(record.timestamp > 0);
    }

    #[test]
    fn test_canonical_payload_is_deterministic() {
        let record = test_record();
        assert_eq!(record.signing_data(), record.signing_data());

        // An identical record canonicalizes identically
        let twin = test_record();
        assert_eq!(record.signing_data(), twin.signing_data());
    }

    #[test]
    fn test_every_field_changes_the_payload() {
        let base = test_record().signing_data();

        let mut r = test_record();
        r.req_id = "req_1700000000000000001".to_string();
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.file.id = "f2".to_string();
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.file.name = "report2.pdf".to_string();
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.actor.id = "u2".to_string();
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.actor.name = "bob".to_string();
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.access = AccessKind::Read;
        assert_ne!(r.signing_data(), base);

        let mut r = test_record();
        r.timestamp = 1_700_000_001;
        assert_ne!(r.signing_data(), base);
    }

    #[test]
    fn test_no_collision_across_field_boundaries() {
        // Without length prefixes, ("ab","c") and ("a","bc") would
        // concatenate to the same bytes.
        let mut left = test_record();
        left.file.id = "ab".to_string();
        left.file.name = "c".to_string();

        let mut right = test_record();
        right.file.id = "a".to_string();
        right.file.name = "bc".to_string();

        assert_ne!(left.signing_data(), right.signing_data());
    }

    #[test]
    fn test_payload_carries_symbolic_access_name() {
        let record = test_record();
        let data = record.signing_data();

        let needle = b"WRITE";
        assert!(data.windows(needle.len()).any(|w| w == needle));
    }
}
