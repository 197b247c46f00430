//! In-process change feed over a VocabRepository
//!
//! Change notifications fan out over a broadcast channel. Each subscription
//! owns a forwarding task that re-queries the repository with its filter on
//! every notification and pushes the result as a fresh snapshot.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use lexicard::{
    DomainError, SubjectFilter, Subscription, VocabFeed, VocabRepository, VocabSnapshot,
};

/// Pending change notifications kept per subscriber before it lags
const CHANGE_BUFFER: usize = 64;
/// Snapshots queued for a slow consumer
const SNAPSHOT_BUFFER: usize = 8;

pub struct BroadcastVocabFeed {
    repo: Arc<dyn VocabRepository>,
    changes: broadcast::Sender<()>,
}

impl BroadcastVocabFeed {
    pub fn new(repo: Arc<dyn VocabRepository>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self { repo, changes }
    }

    /// Number of live subscriptions
    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

#[async_trait]
impl VocabFeed for BroadcastVocabFeed {
    async fn subscribe(&self, filter: SubjectFilter) -> Result<Subscription, DomainError> {
        // Listen before the first query so no change slips between them
        let mut changes = self.changes.subscribe();
        let initial = self.repo.list(&filter).await?;

        let (tx, rx) = mpsc::channel(SNAPSHOT_BUFFER);
        tx.try_send(VocabSnapshot::new(filter.clone(), initial))
            .map_err(|e| DomainError::ExternalService(format!("Failed to queue snapshot: {e}")))?;

        let repo = self.repo.clone();
        let task_filter = filter.clone();
        let task = tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    // A lagged receiver only missed notifications; one re-query covers them
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }

                match repo.list(&task_filter).await {
                    Ok(entries) => {
                        let snapshot = VocabSnapshot::new(task_filter.clone(), entries);
                        if tx.send(snapshot).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(filter = %task_filter, error = %e, "Failed to refresh snapshot");
                    }
                }
            }
        });

        tracing::debug!(filter = %filter, "Feed subscription opened");

        Ok(Subscription::new(filter, rx, move || task.abort()))
    }

    fn notify_changed(&self) {
        // Err only means nobody is listening
        let _ = self.changes.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryVocabRepository;
    use lexicard::NewVocabEntry;
    use std::time::Duration;

    fn entry(word: &str, subject: &str) -> lexicard::VocabEntry {
        NewVocabEntry {
            word: word.to_string(),
            meaning: format!("meaning of {}", word),
            example: None,
            subject: subject.to_string(),
        }
        .into_entry()
        .unwrap()
    }

    #[tokio::test]
    async fn test_initial_snapshot_then_refresh_on_change() {
        let repo = Arc::new(InMemoryVocabRepository::default());
        repo.insert(&entry("atom", "physics")).await.unwrap();
        let feed = BroadcastVocabFeed::new(repo.clone());

        let mut subscription = feed.subscribe("physics".parse().unwrap()).await.unwrap();
        let initial = subscription.next_snapshot().await.unwrap();
        assert_eq!(initial.count(), 1);

        repo.insert(&entry("cell", "biology")).await.unwrap();
        repo.insert(&entry("quark", "physics")).await.unwrap();
        feed.notify_changed();

        let refreshed = tokio::time::timeout(Duration::from_secs(5), subscription.next_snapshot())
            .await
            .unwrap()
            .unwrap();
        let words: Vec<&str> = refreshed.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(refreshed.count(), 2);
        assert!(words.contains(&"quark"));
        assert!(!words.contains(&"cell"));
    }

    #[tokio::test]
    async fn test_dropping_subscription_stops_forwarding() {
        let repo = Arc::new(InMemoryVocabRepository::default());
        let feed = BroadcastVocabFeed::new(repo);

        let subscription = feed.subscribe(SubjectFilter::All).await.unwrap();
        assert_eq!(feed.subscriber_count(), 1);

        drop(subscription);

        // Abort is observed once the runtime polls the task again
        for _ in 0..100 {
            if feed.subscriber_count() == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(feed.subscriber_count(), 0);
    }
}
