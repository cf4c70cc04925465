//! File access kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

/// The kind of access performed on a file.
///
/// On the wire and in the canonical payload this is always the symbolic
/// name (`"READ"`, `"WRITE"`, ...), never an internal numeric code, so the
/// contract stays stable across encoding changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessKind {
    /// File content was read.
    Read,
    /// File content was created or written.
    Write,
    /// File content or metadata was updated in place.
    Update,
    /// File was deleted.
    Delete,
}

impl AccessKind {
    /// All access kinds, in wire order.
    pub const ALL: [Self; 4] = [Self::Read, Self::Write, Self::Update, Self::Delete];

    /// The stable symbolic name used on the wire and in the signed payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessKind {
    type Err = RecordError;

    /// Parse the exact symbolic name. Anything else is rejected before a
    /// record is built, let alone submitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(RecordError::UnknownAccessKind(other.to_string())),
        }
    }
}
