//! DefinitionCandidate - One normalized dictionary result

use serde::{Deserialize, Serialize};

/// Label used when a source does not say which part of speech it defines
pub const DEFAULT_PART_OF_SPEECH: &str = "definition";

/// Normalized (part of speech, definition, example) triple
///
/// Carries no reference to the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionCandidate {
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
}

impl DefinitionCandidate {
    /// Build a candidate, returning `None` when the definition is empty.
    ///
    /// Blank part of speech falls back to [`DEFAULT_PART_OF_SPEECH`] and a
    /// blank example is treated as absent.
    pub fn new(
        part_of_speech: Option<&str>,
        definition: impl Into<String>,
        example: Option<&str>,
    ) -> Option<Self> {
        let definition = definition.into();
        if definition.is_empty() {
            return None;
        }

        let part_of_speech = part_of_speech
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PART_OF_SPEECH)
            .to_string();

        Some(Self {
            part_of_speech,
            definition,
            example: example.filter(|e| !e.is_empty()).map(str::to_string),
        })
    }
}
