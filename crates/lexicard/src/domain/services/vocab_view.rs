//! Vocab View - Single-owner slot for the active feed subscription
//!
//! A view shows one subject filter at a time. Selecting a new filter
//! releases the previous subscription before the next one is opened, so a
//! view never holds more than one.

use std::sync::Arc;

use crate::domain::{errors::DomainError, SubjectFilter, VocabSnapshot};
use crate::ports::{Subscription, VocabFeed};

pub struct VocabView<F: VocabFeed + ?Sized> {
    feed: Arc<F>,
    active: Option<Subscription>,
}

impl<F: VocabFeed + ?Sized> VocabView<F> {
    pub fn new(feed: Arc<F>) -> Self {
        Self { feed, active: None }
    }

    /// Switch the view to `filter`, replacing any active subscription
    pub async fn select(&mut self, filter: SubjectFilter) -> Result<(), DomainError> {
        if let Some(previous) = self.active.take() {
            tracing::debug!(filter = %previous.filter(), "Releasing subscription");
            previous.unsubscribe();
        }

        let subscription = self.feed.subscribe(filter).await?;
        tracing::debug!(filter = %subscription.filter(), "Subscribed");
        self.active = Some(subscription);
        Ok(())
    }

    /// Filter of the active subscription
    pub fn filter(&self) -> Option<&SubjectFilter> {
        self.active.as_ref().map(Subscription::filter)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Release the active subscription, if any
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Next snapshot from the active subscription
    ///
    /// Pends forever while nothing is selected. `None` means the feed
    /// closed the subscription.
    pub async fn next_snapshot(&mut self) -> Option<VocabSnapshot> {
        match self.active.as_mut() {
            Some(subscription) => subscription.next_snapshot().await,
            None => std::future::pending().await,
        }
    }
}
