//! In-memory adapters
//!
//! Process-local storage. Everything held here is lost when the server stops.

pub mod name_repo;

pub use name_repo::InMemoryNameRepository;
