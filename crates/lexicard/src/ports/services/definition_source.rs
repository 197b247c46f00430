//! Definition Source Port
//!
//! Abstract interface for one external dictionary.

use async_trait::async_trait;

use crate::domain::SourceOutcome;

/// A dictionary that can suggest definitions for a word
///
/// Implementations never return an error: transport failures, bad statuses
/// and malformed payloads are reported as [`SourceOutcome::Failed`].
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Short stable name used in logs and lookup reports
    fn name(&self) -> &str;

    /// Query the dictionary for `word`, exactly once
    async fn fetch_definitions(&self, word: &str) -> SourceOutcome;
}
