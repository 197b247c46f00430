//! Vocab Feed Port
//!
//! Live, filtered view over the vocabulary collection.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{errors::DomainError, SubjectFilter, VocabSnapshot};

/// Change feed over vocabulary entries
///
/// A subscription receives the current snapshot right away and a fresh
/// snapshot after every change.
#[async_trait]
pub trait VocabFeed: Send + Sync {
    /// Subscribe to entries matching `filter`
    async fn subscribe(&self, filter: SubjectFilter) -> Result<Subscription, DomainError>;

    /// Tell every live subscription that the collection changed
    fn notify_changed(&self);
}

type ReleaseFn = Box<dyn FnOnce() + Send + Sync>;

/// Handle to one live subscription
///
/// Dropping the handle unsubscribes.
pub struct Subscription {
    filter: SubjectFilter,
    snapshots: mpsc::Receiver<VocabSnapshot>,
    release: Option<ReleaseFn>,
}

impl Subscription {
    /// `release` runs exactly once, when the handle is dropped
    pub fn new(
        filter: SubjectFilter,
        snapshots: mpsc::Receiver<VocabSnapshot>,
        release: impl FnOnce() + Send + Sync + 'static,
    ) -> Self {
        Self {
            filter,
            snapshots,
            release: Some(Box::new(release)),
        }
    }

    pub fn filter(&self) -> &SubjectFilter {
        &self.filter
    }

    /// Wait for the next snapshot; `None` once the feed has shut down
    pub async fn next_snapshot(&mut self) -> Option<VocabSnapshot> {
        self.snapshots.recv().await
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_release_runs_once_on_drop() {
        let released = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel(1);
        let counter = released.clone();
        let subscription = Subscription::new(SubjectFilter::All, rx, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tx.send(VocabSnapshot::new(SubjectFilter::All, Vec::new()))
            .await
            .unwrap();

        subscription.unsubscribe();
        assert_eq!(released.load(Ordering::SeqCst), 1);
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn test_next_snapshot_ends_when_sender_closes() {
        let (tx, rx) = mpsc::channel(1);
        let mut subscription = Subscription::new(SubjectFilter::All, rx, || {});

        tx.send(VocabSnapshot::new(SubjectFilter::All, Vec::new()))
            .await
            .unwrap();
        drop(tx);

        assert!(subscription.next_snapshot().await.is_some());
        assert!(subscription.next_snapshot().await.is_none());
    }
}
