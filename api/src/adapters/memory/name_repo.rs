//! In-memory adapter for NameRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::NameEntry;
use crate::domain::ports::NameRepository;
use crate::error::DomainError;

/// In-memory implementation of NameRepository
///
/// The write lock is held for the whole append, so the returned length always
/// includes the entry just pushed.
#[derive(Default)]
pub struct InMemoryNameRepository {
    names: RwLock<Vec<NameEntry>>,
}

impl InMemoryNameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with names
    #[cfg(test)]
    pub fn with_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = NameEntry>,
    {
        Self {
            names: RwLock::new(names.into_iter().collect()),
        }
    }
}

#[async_trait]
impl NameRepository for InMemoryNameRepository {
    async fn list(&self) -> Result<Vec<NameEntry>, DomainError> {
        let names = self.names.read().await;
        Ok(names.clone())
    }

    async fn append(&self, entry: NameEntry) -> Result<usize, DomainError> {
        let mut names = self.names.write().await;
        names.push(entry);
        Ok(names.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.names.read().await.len())
    }
}
