//! Mock implementations of port traits
//!
//! The production store is already in-memory, so the mocks here cover the
//! failure paths the real adapter never takes.

use async_trait::async_trait;

use crate::domain::entities::NameEntry;
use crate::domain::ports::NameRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Name Repository
// ============================================================================

/// Repository whose every call fails with an internal error
pub struct FailingNameRepository;

#[async_trait]
impl NameRepository for FailingNameRepository {
    async fn list(&self) -> Result<Vec<NameEntry>, DomainError> {
        Err(DomainError::Internal("storage unavailable".to_string()))
    }

    async fn append(&self, _entry: NameEntry) -> Result<usize, DomainError> {
        Err(DomainError::Internal("storage unavailable".to_string()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(DomainError::Internal("storage unavailable".to_string()))
    }
}
