//! Wiktionary definition source
//!
//! Uses the Wikimedia REST `page/definition` endpoint, whose payload groups
//! entries by language code and then by part of speech. Definitions come
//! back as HTML fragments and are stripped down to plain text.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::http::{decode_leading, fetch_json, first_text, into_outcome, word_url};
use crate::domain::{DefinitionCandidate, SourceFault, SourceOutcome};
use crate::ports::DefinitionSource;

pub const WIKTIONARY_SOURCE: &str = "wiktionary";

const MAX_ENTRIES: usize = 3;
const MAX_DEFINITIONS_PER_ENTRY: usize = 2;
const MAX_CANDIDATES: usize = 3;
/// Cleaned definitions must be strictly longer than this
const MIN_DEFINITION_LEN: usize = 10;

/// Community dictionary source backed by Wiktionary
#[derive(Clone)]
pub struct WiktionarySource {
    client: Client,
    base_url: String,
    language: String,
}

impl WiktionarySource {
    /// `edition` picks the wiki (`en` → en.wiktionary.org); `language` picks
    /// the language group inside the payload
    pub fn new(client: Client, edition: &str, language: impl Into<String>) -> Self {
        Self {
            client,
            base_url: format!(
                "https://{}.wiktionary.org/api/rest_v1/page/definition",
                edition
            ),
            language: language.into(),
        }
    }

    /// Overrides the endpoint base (tests, mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn request_url(&self, word: &str) -> String {
        word_url(&self.base_url, word)
    }

    fn candidates_from(
        &self,
        mut payload: HashMap<String, Value>,
    ) -> Result<Vec<DefinitionCandidate>, SourceFault> {
        let Some(group) = payload.remove(&self.language) else {
            return Ok(Vec::new());
        };

        let entries: Vec<Value> =
            serde_json::from_value(group).map_err(|err| SourceFault::Parse(err.to_string()))?;

        Ok(collect_candidates(&entries))
    }
}

#[async_trait]
impl DefinitionSource for WiktionarySource {
    fn name(&self) -> &str {
        WIKTIONARY_SOURCE
    }

    async fn fetch_definitions(&self, word: &str) -> SourceOutcome {
        let url = self.request_url(word);
        tracing::debug!(source = WIKTIONARY_SOURCE, url = %url, "Querying dictionary");

        let result = fetch_json::<HashMap<String, Value>>(self.client.get(&url))
            .await
            .and_then(|payload| self.candidates_from(payload));

        into_outcome(result)
    }
}

// ============================================
// Payload Types
// ============================================

#[derive(Debug, Deserialize)]
struct WiktionaryEntry {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct WiktionaryDefinition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    examples: Option<Vec<Value>>,
}

// ============================================
// Normalization
// ============================================

/// First 3 entries × first 2 definitions, keeping at most 3 candidates
fn collect_candidates(entries: &[Value]) -> Vec<DefinitionCandidate> {
    let mut candidates = Vec::new();

    'entries: for entry in decode_leading::<WiktionaryEntry>(entries, MAX_ENTRIES) {
        let definitions = entry.definitions.as_deref().unwrap_or_default();

        for definition in
            decode_leading::<WiktionaryDefinition>(definitions, MAX_DEFINITIONS_PER_ENTRY)
        {
            let cleaned = strip_tags(definition.definition.as_deref().unwrap_or_default());
            if display_len(&cleaned) <= MIN_DEFINITION_LEN {
                continue;
            }

            if let Some(candidate) = DefinitionCandidate::new(
                entry.part_of_speech.as_deref(),
                cleaned,
                first_text(definition.examples.as_deref()),
            ) {
                candidates.push(candidate);
            }

            if candidates.len() >= MAX_CANDIDATES {
                break 'entries;
            }
        }
    }

    candidates
}

/// Length in UTF-16 code units
fn display_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Remove every `<...>` tag and trim surrounding whitespace
fn strip_tags(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    tag.replace_all(html, "").trim().to_string()
}
