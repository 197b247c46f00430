//! Vocab - Flashcard request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use lexicard::{NewVocabEntry, VocabEntry, VocabSnapshot};

/// Create vocab entry request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVocabRequest {
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    /// Subject tag, e.g. "english" or "biology"
    pub subject: String,
}

impl From<CreateVocabRequest> for NewVocabEntry {
    fn from(request: CreateVocabRequest) -> Self {
        Self {
            word: request.word,
            meaning: request.meaning,
            example: request.example,
            subject: request.subject,
        }
    }
}

/// Vocab list query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VocabQuery {
    /// Subject tag to filter on; "all" or empty for every subject
    pub subject: Option<String>,
}

/// Stored vocab entry
#[derive(Debug, Serialize, ToSchema)]
pub struct VocabEntryResponse {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

impl From<VocabEntry> for VocabEntryResponse {
    fn from(entry: VocabEntry) -> Self {
        Self {
            id: entry.id,
            word: entry.word,
            meaning: entry.meaning,
            example: entry.example,
            subject: entry.subject.into(),
            created_at: entry.created_at,
        }
    }
}

/// Filtered entry list, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct VocabListResponse {
    pub subject: String,
    pub count: usize,
    pub entries: Vec<VocabEntryResponse>,
}

impl From<VocabSnapshot> for VocabListResponse {
    fn from(snapshot: VocabSnapshot) -> Self {
        Self {
            subject: snapshot.filter.to_string(),
            count: snapshot.count(),
            entries: snapshot.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Message a live view client sends to switch subjects
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectSubjectMessage {
    pub subject: String,
}
