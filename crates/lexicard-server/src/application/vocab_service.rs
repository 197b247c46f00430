//! Vocab Application Service (Use Case)
//!
//! Orchestrates domain operations for vocabulary management.

use std::sync::Arc;

use lexicard::{
    DomainError, NewVocabEntry, SubjectFilter, Subscription, VocabEntry, VocabFeed,
    VocabRepository, VocabSnapshot,
};

/// Application service for vocabulary operations
pub struct VocabService<R: VocabRepository + ?Sized, F: VocabFeed + ?Sized> {
    repo: Arc<R>,
    feed: Arc<F>,
}

impl<R: VocabRepository + ?Sized, F: VocabFeed + ?Sized> VocabService<R, F> {
    pub fn new(repo: Arc<R>, feed: Arc<F>) -> Self {
        Self { repo, feed }
    }

    /// Validate and store a new entry, then notify live views
    pub async fn add(&self, input: NewVocabEntry) -> Result<VocabEntry, DomainError> {
        let entry = input.into_entry()?;
        let saved = self.repo.insert(&entry).await?;

        tracing::info!(
            id = %saved.id,
            word = %saved.word,
            subject = %saved.subject,
            "Added vocab entry"
        );

        self.feed.notify_changed();
        Ok(saved)
    }

    /// Current entries for a filter, newest first
    pub async fn list(&self, filter: SubjectFilter) -> Result<VocabSnapshot, DomainError> {
        let entries = self.repo.list(&filter).await?;
        Ok(VocabSnapshot::new(filter, entries))
    }

    pub async fn subscribe(&self, filter: SubjectFilter) -> Result<Subscription, DomainError> {
        self.feed.subscribe(filter).await
    }

    /// Feed handle for views that manage their own subscriptions
    pub fn feed(&self) -> Arc<F> {
        self.feed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryVocabRepository;
    use crate::adapters::BroadcastVocabFeed;
    use std::time::Duration;

    fn service() -> VocabService<dyn VocabRepository, dyn VocabFeed> {
        let repo: Arc<dyn VocabRepository> = Arc::new(InMemoryVocabRepository::default());
        let feed: Arc<dyn VocabFeed> = Arc::new(BroadcastVocabFeed::new(repo.clone()));
        VocabService::new(repo, feed)
    }

    fn input(word: &str, subject: &str) -> NewVocabEntry {
        NewVocabEntry {
            word: word.to_string(),
            meaning: format!("meaning of {}", word),
            example: Some(format!("an example using {}", word)),
            subject: subject.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_by_subject() {
        let service = service();
        service.add(input("integral", "math")).await.unwrap();
        service.add(input("verb", "english")).await.unwrap();
        service.add(input("matrix", "Math")).await.unwrap();

        let math = service.list("math".parse().unwrap()).await.unwrap();
        assert_eq!(math.count(), 2);
        assert!(math.entries.iter().all(|e| e.subject.as_str() == "math"));

        let all = service.list(SubjectFilter::All).await.unwrap();
        assert_eq!(all.count(), 3);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_input() {
        let service = service();
        let result = service.add(input("   ", "math")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let all = service.list(SubjectFilter::All).await.unwrap();
        assert_eq!(all.count(), 0);
    }

    #[tokio::test]
    async fn test_add_pushes_snapshot_to_subscribers() {
        let service = service();
        let mut subscription = service.subscribe(SubjectFilter::All).await.unwrap();
        assert_eq!(subscription.next_snapshot().await.unwrap().count(), 0);

        let saved = service.add(input("photon", "physics")).await.unwrap();

        let snapshot = tokio::time::timeout(Duration::from_secs(5), subscription.next_snapshot())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.entries, vec![saved]);
    }
}
