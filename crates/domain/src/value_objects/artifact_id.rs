//! Voice artifact identifier
//!
//! A 128-bit random token naming one generated audio file. Identifiers are
//! collision-resistant without coordination, so concurrent synthesis never
//! needs a lock. Parsing only accepts the 32-hex rendering, which keeps path
//! separators (and thus directory traversal) unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// File extension shared by all voice artifacts
pub const ARTIFACT_EXTENSION: &str = "mp3";

/// Identifier of a generated voice artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactId {
    value: String,
}

impl ArtifactId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Parse an identifier, accepting only 32 lowercase hex characters
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.len() == 32 && s.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()) {
            Ok(Self {
                value: s.to_string(),
            })
        } else {
            Err(DomainError::InvalidArtifactId(s.to_string()))
        }
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// File name of the artifact inside the storage directory
    pub fn file_name(&self) -> String {
        format!("{}.{ARTIFACT_EXTENSION}", self.value)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ArtifactId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArtifactId> for String {
    fn from(id: ArtifactId) -> Self {
        id.value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_id_parses_back() {
        let id = ArtifactId::generate();
        let parsed = ArtifactId::parse(id.as_str()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| ArtifactId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn file_name_has_fixed_extension() {
        let id = ArtifactId::generate();
        assert_eq!(id.file_name(), format!("{id}.mp3"));
    }

    #[test]
    fn parse_rejects_path_traversal() {
        assert!(ArtifactId::parse("../../../etc/passwd").is_err());
        assert!(ArtifactId::parse("..%2f..%2fsecret").is_err());
        assert!(ArtifactId::parse("a/b").is_err());
        assert!(ArtifactId::parse("a\\b").is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(ArtifactId::parse("").is_err());
        assert!(ArtifactId::parse("abc123").is_err());
        assert!(ArtifactId::parse(&"a".repeat(33)).is_err());
    }

    #[test]
    fn parse_rejects_uppercase_and_non_hex() {
        assert!(ArtifactId::parse(&"A".repeat(32)).is_err());
        assert!(ArtifactId::parse(&"g".repeat(32)).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = ArtifactId::generate();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ArtifactId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<ArtifactId>("\"../../x\"").is_err());
    }
}
