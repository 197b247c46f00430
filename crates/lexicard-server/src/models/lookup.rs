//! Lookup - Definition suggestion DTOs

use serde::Serialize;
use utoipa::ToSchema;

use lexicard::{AttemptStatus, DefinitionCandidate, LookupReport, SourceAttempt};

/// One suggested definition
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionResponse {
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
}

impl From<DefinitionCandidate> for DefinitionResponse {
    fn from(candidate: DefinitionCandidate) -> Self {
        Self {
            part_of_speech: candidate.part_of_speech,
            definition: candidate.definition,
            example: candidate.example,
        }
    }
}

/// What one dictionary source returned
#[derive(Debug, Serialize, ToSchema)]
pub struct SourceAttemptResponse {
    pub source: String,
    /// found, empty or failed
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<SourceAttempt> for SourceAttemptResponse {
    fn from(attempt: SourceAttempt) -> Self {
        let (outcome, count, reason) = match attempt.status {
            AttemptStatus::Found { count } => ("found", Some(count), None),
            AttemptStatus::Empty => ("empty", None, None),
            AttemptStatus::Failed { reason } => ("failed", None, Some(reason)),
        };

        Self {
            source: attempt.source,
            outcome: outcome.to_string(),
            count,
            reason,
        }
    }
}

/// Lookup result; empty `candidates` means the meaning must be entered manually
#[derive(Debug, Serialize, ToSchema)]
pub struct LookupResponse {
    pub word: String,
    /// Dictionary the candidates came from
    pub source: Option<String>,
    pub candidates: Vec<DefinitionResponse>,
    pub attempts: Vec<SourceAttemptResponse>,
}

impl From<LookupReport> for LookupResponse {
    fn from(report: LookupReport) -> Self {
        Self {
            word: report.word,
            source: report.source,
            candidates: report.candidates.into_iter().map(Into::into).collect(),
            attempts: report.attempts.into_iter().map(Into::into).collect(),
        }
    }
}
