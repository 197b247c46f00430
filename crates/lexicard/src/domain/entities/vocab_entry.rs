//! VocabEntry - A single flashcard
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Subject, SubjectFilter};

pub const MAX_WORD_LEN: usize = 100;
pub const MAX_MEANING_LEN: usize = 1000;

/// Stored vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub subject: Subject,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated input for a new entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVocabEntry {
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub subject: String,
}

impl NewVocabEntry {
    /// Validate the input and stamp it with an id and creation time
    pub fn into_entry(self) -> Result<VocabEntry, DomainError> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(DomainError::validation("Word cannot be empty"));
        }
        if word.chars().count() > MAX_WORD_LEN {
            return Err(DomainError::Validation(format!(
                "Word must be at most {} characters",
                MAX_WORD_LEN
            )));
        }

        let meaning = self.meaning.trim();
        if meaning.is_empty() {
            return Err(DomainError::validation("Meaning cannot be empty"));
        }
        if meaning.chars().count() > MAX_MEANING_LEN {
            return Err(DomainError::Validation(format!(
                "Meaning must be at most {} characters",
                MAX_MEANING_LEN
            )));
        }

        let example = self
            .example
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(VocabEntry {
            id: Uuid::new_v4(),
            word: word.to_string(),
            meaning: meaning.to_string(),
            example,
            subject: Subject::parse(&self.subject)?,
            created_at: Utc::now(),
        })
    }
}

/// Full filtered collection at one moment, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabSnapshot {
    pub filter: SubjectFilter,
    pub entries: Vec<VocabEntry>,
}

impl VocabSnapshot {
    pub fn new(filter: SubjectFilter, entries: Vec<VocabEntry>) -> Self {
        Self { filter, entries }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Order entries newest first, ties broken by id
pub fn sort_newest_first(entries: &mut [VocabEntry]) {
    entries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
