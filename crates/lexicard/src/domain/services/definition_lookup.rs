//! Definition Lookup - Ordered, short-circuiting fallback across sources
//!
//! Sources are consulted one at a time in priority order. The first source
//! that yields at least one candidate wins and its candidates are returned
//! as-is; results from different sources are never merged. Empty answers,
//! faults and timeouts all fall through to the next source.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AttemptStatus, DefinitionCandidate, SourceFault, SourceOutcome};
use crate::ports::DefinitionSource;

/// Default time budget for a single source call
pub const DEFAULT_SOURCE_BUDGET: Duration = Duration::from_secs(8);

/// One source consulted during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAttempt {
    pub source: String,
    #[serde(flatten)]
    pub status: AttemptStatus,
}

/// Outcome of a lookup with per-source diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub word: String,
    /// Source whose candidates were returned, if any
    pub source: Option<String>,
    pub candidates: Vec<DefinitionCandidate>,
    pub attempts: Vec<SourceAttempt>,
}

/// Lookup orchestrator over an ordered list of definition sources
#[derive(Clone)]
pub struct DefinitionLookup {
    sources: Vec<Arc<dyn DefinitionSource>>,
    source_budget: Duration,
}

impl DefinitionLookup {
    /// Sources are consulted in the order given
    pub fn new(sources: Vec<Arc<dyn DefinitionSource>>) -> Self {
        Self {
            sources,
            source_budget: DEFAULT_SOURCE_BUDGET,
        }
    }

    /// Overrides the per-source time budget
    pub fn with_source_budget(mut self, budget: Duration) -> Self {
        self.source_budget = budget;
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Candidates from the first source that has any, or an empty list
    ///
    /// The word is passed to sources untouched; callers trim and validate it.
    pub async fn lookup(&self, word: &str) -> Vec<DefinitionCandidate> {
        self.lookup_report(word).await.candidates
    }

    /// Same as [`lookup`](Self::lookup), keeping track of every source tried
    pub async fn lookup_report(&self, word: &str) -> LookupReport {
        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let name = source.name().to_string();
            let outcome = self.consult(source.as_ref(), word).await;
            attempts.push(SourceAttempt {
                source: name.clone(),
                status: outcome.status(),
            });

            match outcome {
                SourceOutcome::Found(candidates) if !candidates.is_empty() => {
                    tracing::info!(
                        source = %name,
                        word = %word,
                        count = candidates.len(),
                        "Definitions found"
                    );
                    return LookupReport {
                        word: word.to_string(),
                        source: Some(name),
                        candidates,
                        attempts,
                    };
                }
                SourceOutcome::Failed(fault) => {
                    tracing::warn!(source = %name, word = %word, error = %fault, "Definition source failed");
                }
                SourceOutcome::Found(_) | SourceOutcome::Empty => {
                    tracing::debug!(source = %name, word = %word, "Definition source had no results");
                }
            }
        }

        tracing::info!(word = %word, "No definitions found in any source");

        LookupReport {
            word: word.to_string(),
            source: None,
            candidates: Vec::new(),
            attempts,
        }
    }

    async fn consult(&self, source: &dyn DefinitionSource, word: &str) -> SourceOutcome {
        match tokio::time::timeout(self.source_budget, source.fetch_definitions(word)).await {
            Ok(outcome) => outcome,
            Err(_) => SourceOutcome::Failed(SourceFault::Timeout),
        }
    }
}
