//! Name entry domain entity
//!
//! A single submitted name. Entries are append-only: once stored they are
//! never updated or removed.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, INVALID_NAME_MESSAGE};

/// A trimmed, non-empty name
///
/// The only way to build one is through [`NameEntry::parse`], so every value
/// in circulation already satisfies the non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameEntry(String);

impl NameEntry {
    /// Trim the raw input and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim_matches(is_trimmable);
        if trimmed.is_empty() {
            return Err(DomainError::Validation(INVALID_NAME_MESSAGE.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Whitespace as browsers trim it: Unicode White_Space without NEL (U+0085),
/// plus the byte order mark (U+FEFF)
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

impl TryFrom<String> for NameEntry {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<NameEntry> for String {
    fn from(entry: NameEntry) -> Self {
        entry.0
    }
}

impl std::fmt::Display for NameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
