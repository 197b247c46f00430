//! In-memory VocabRepository for tests

use async_trait::async_trait;
use std::sync::Mutex;

use lexicard::domain::sort_newest_first;
use lexicard::{DomainError, SubjectFilter, VocabEntry, VocabRepository};

#[derive(Default)]
pub struct InMemoryVocabRepository {
    entries: Mutex<Vec<VocabEntry>>,
}

#[async_trait]
impl VocabRepository for InMemoryVocabRepository {
    async fn insert(&self, entry: &VocabEntry) -> Result<VocabEntry, DomainError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Repository(e.to_string()))?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(DomainError::Conflict(format!("Entry {} already exists", entry.id)));
        }
        entries.push(entry.clone());
        Ok(entry.clone())
    }

    async fn list(&self, filter: &SubjectFilter) -> Result<Vec<VocabEntry>, DomainError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Repository(e.to_string()))?;
        let mut matching: Vec<VocabEntry> = entries
            .iter()
            .filter(|e| filter.matches(&e.subject))
            .cloned()
            .collect();
        sort_newest_first(&mut matching);
        Ok(matching)
    }
}
