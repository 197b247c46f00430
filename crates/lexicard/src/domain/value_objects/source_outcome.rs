//! SourceOutcome - What a single dictionary source produced for a word

use serde::Serialize;

use crate::domain::entities::DefinitionCandidate;
use crate::domain::errors::SourceFault;

/// Result of asking one dictionary source
///
/// `Empty` and `Failed` both make the lookup fall through to the next
/// source; they stay distinct so diagnostics can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// At least one usable candidate, in payload order
    Found(Vec<DefinitionCandidate>),
    /// Well-formed answer with nothing usable in it
    Empty,
    /// Transport, status, parse or timeout fault
    Failed(SourceFault),
}

impl SourceOutcome {
    /// Build from normalized candidates, mapping an empty list to `Empty`
    pub fn from_candidates(candidates: Vec<DefinitionCandidate>) -> Self {
        if candidates.is_empty() {
            SourceOutcome::Empty
        } else {
            SourceOutcome::Found(candidates)
        }
    }

    pub fn has_results(&self) -> bool {
        matches!(self, SourceOutcome::Found(_))
    }

    /// Summary without the candidates themselves
    pub fn status(&self) -> AttemptStatus {
        match self {
            SourceOutcome::Found(candidates) => AttemptStatus::Found {
                count: candidates.len(),
            },
            SourceOutcome::Empty => AttemptStatus::Empty,
            SourceOutcome::Failed(fault) => AttemptStatus::Failed {
                reason: fault.to_string(),
            },
        }
    }
}

/// Serializable summary of one source attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptStatus {
    Found { count: usize },
    Empty,
    Failed { reason: String },
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptStatus::Found { count } => write!(f, "found {}", count),
            AttemptStatus::Empty => write!(f, "empty"),
            AttemptStatus::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}
