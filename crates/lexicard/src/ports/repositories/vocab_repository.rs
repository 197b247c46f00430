//! Vocab Repository Port
//!
//! Abstract interface for vocabulary persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, SubjectFilter, VocabEntry};

/// Repository interface for vocabulary entries
#[async_trait]
pub trait VocabRepository: Send + Sync {
    /// Insert one new entry
    async fn insert(&self, entry: &VocabEntry) -> Result<VocabEntry, DomainError>;

    /// Entries matching the filter, newest first
    async fn list(&self, filter: &SubjectFilter) -> Result<Vec<VocabEntry>, DomainError>;
}
