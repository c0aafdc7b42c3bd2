//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::NameEntry;

/// Create a name entry, panicking on invalid input
pub fn test_entry(name: &str) -> NameEntry {
    NameEntry::parse(name).expect("fixture names must be non-empty")
}

/// Unwrap entries into plain strings for comparisons
pub fn names_of(entries: Vec<NameEntry>) -> Vec<String> {
    entries.into_iter().map(NameEntry::into_inner).collect()
}
