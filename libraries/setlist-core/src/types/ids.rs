/// ID types for Setlist entities
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of a `DocumentId` in bytes
pub const DOCUMENT_ID_LEN: usize = 12;

/// Length of a `DocumentId` rendered as hexadecimal
pub const DOCUMENT_ID_HEX_LEN: usize = DOCUMENT_ID_LEN * 2;

/// Store-native document identifier
///
/// Twelve bytes: a big-endian Unix timestamp (seconds) followed by eight random
/// bytes. Rendered as 24 lowercase hex digits; parsing accepts either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId([u8; DOCUMENT_ID_LEN]);

impl DocumentId {
    /// Generate a new identifier stamped with the current time
    pub fn generate() -> Self {
        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);
        Self(bytes)
    }

    /// Build an identifier from raw bytes
    pub fn from_bytes(bytes: [u8; DOCUMENT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; DOCUMENT_ID_LEN] {
        &self.0
    }

    /// Creation time encoded in the identifier (Unix seconds)
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

/// Error returned when a string is not a well-formed `DocumentId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDocumentIdError {
    input: String,
}

impl fmt::Display for ParseDocumentIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a {}-digit hexadecimal identifier",
            self.input, DOCUMENT_ID_HEX_LEN
        )
    }
}

impl std::error::Error for ParseDocumentIdError {}

impl FromStr for DocumentId {
    type Err = ParseDocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDocumentIdError {
            input: s.to_string(),
        };

        if s.len() != DOCUMENT_ID_HEX_LEN {
            return Err(err());
        }

        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or_else(err)?;
            let lo = hex_value(pair[1]).ok_or_else(err)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for DocumentId {
    type Error = ParseDocumentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}

/// User identifier
///
/// Opaque; issued by the (external) authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identity is blank
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
