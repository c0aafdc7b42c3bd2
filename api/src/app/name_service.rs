//! Name service
//!
//! Handles listing and submitting names.

use std::sync::Arc;

use crate::domain::entities::NameEntry;
use crate::domain::ports::NameRepository;
use crate::error::{AppError, DomainError, INVALID_NAME_MESSAGE};

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedName {
    pub name: NameEntry,
    /// Length of the sequence after the append
    pub total: usize,
}

/// Service for managing the name roster
pub struct NameService<NR>
where
    NR: NameRepository,
{
    names: Arc<NR>,
}

impl<NR> NameService<NR>
where
    NR: NameRepository,
{
    pub fn new(names: Arc<NR>) -> Self {
        Self { names }
    }

    /// All submitted names in submission order
    pub async fn list_names(&self) -> Result<Vec<NameEntry>, AppError> {
        Ok(self.names.list().await?)
    }

    /// Validate and append a name
    ///
    /// `raw` is `None` when the submitted field was absent or not a string.
    pub async fn add_name(&self, raw: Option<&str>) -> Result<AddedName, AppError> {
        let raw = raw.ok_or_else(|| DomainError::Validation(INVALID_NAME_MESSAGE.to_string()))?;
        let name = NameEntry::parse(raw)?;

        let total = self.names.append(name.clone()).await?;
        tracing::info!(name = %name, total, "Name added");

        Ok(AddedName { name, total })
    }

    /// Number of stored names
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.names.count().await?)
    }
}
