//! Free Dictionary API source (dictionaryapi.dev)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::http::{decode_leading, fetch_json, into_outcome, word_url};
use crate::domain::{DefinitionCandidate, SourceOutcome};
use crate::ports::DefinitionSource;

pub const FREE_DICTIONARY_SOURCE: &str = "free-dictionary";

const BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const MAX_MEANINGS: usize = 3;

/// Structured dictionary source grouped by part of speech
#[derive(Clone)]
pub struct FreeDictionarySource {
    client: Client,
    base_url: String,
}

impl FreeDictionarySource {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
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
}

#[async_trait]
impl DefinitionSource for FreeDictionarySource {
    fn name(&self) -> &str {
        FREE_DICTIONARY_SOURCE
    }

    async fn fetch_definitions(&self, word: &str) -> SourceOutcome {
        let url = self.request_url(word);
        tracing::debug!(source = FREE_DICTIONARY_SOURCE, url = %url, "Querying dictionary");

        let result = fetch_json::<Vec<Value>>(self.client.get(&url))
            .await
            .map(|entries| collect_candidates(&entries));

        into_outcome(result)
    }
}

#[derive(Debug, Deserialize)]
struct FreeDictionaryEntry {
    #[serde(default)]
    meanings: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
}

/// First definition of each of the first 3 meanings of the first entry
fn collect_candidates(entries: &[Value]) -> Vec<DefinitionCandidate> {
    let Some(entry) = decode_leading::<FreeDictionaryEntry>(entries, 1).pop() else {
        return Vec::new();
    };
    let meanings = entry.meanings.unwrap_or_default();

    decode_leading::<Meaning>(&meanings, MAX_MEANINGS)
        .into_iter()
        .filter_map(|meaning| {
            let first = decode_leading::<Definition>(meaning.definitions.as_deref()?, 1).pop()?;
            DefinitionCandidate::new(
                meaning.part_of_speech.as_deref(),
                first.definition?,
                first.example.as_deref(),
            )
        })
        .collect()
}
