//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod name_entry;

pub use name_entry::NameEntry;
