//! Repository port traits
//!
//! These traits define the interface for data storage.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::NameEntry;
use crate::error::DomainError;

/// Repository for the ordered sequence of submitted names
///
/// Implementations must serialize appends: concurrent callers may land in any
/// order, but no entry may be lost or duplicated.
#[async_trait]
pub trait NameRepository: Send + Sync {
    /// All names in insertion order
    async fn list(&self) -> Result<Vec<NameEntry>, DomainError>;

    /// Append a name and return the new length of the sequence
    async fn append(&self, entry: NameEntry) -> Result<usize, DomainError>;

    /// Number of stored names
    async fn count(&self) -> Result<usize, DomainError>;
}
