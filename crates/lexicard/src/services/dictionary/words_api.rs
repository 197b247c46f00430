//! WordsAPI source (RapidAPI)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::http::{decode_leading, fetch_json, first_text, into_outcome, word_url};
use crate::domain::{DefinitionCandidate, SourceOutcome};
use crate::ports::DefinitionSource;

pub const WORDS_API_SOURCE: &str = "words-api";

const BASE_URL: &str = "https://wordsapiv1.p.rapidapi.com/words";
const RAPIDAPI_HOST: &str = "wordsapiv1.p.rapidapi.com";
const MAX_RESULTS: usize = 3;

/// Alternate lexical source with a flat result list
#[derive(Clone)]
pub struct WordsApiSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WordsApiSource {
    /// The key is sent as `X-RapidAPI-Key` when present
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key,
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
impl DefinitionSource for WordsApiSource {
    fn name(&self) -> &str {
        WORDS_API_SOURCE
    }

    async fn fetch_definitions(&self, word: &str) -> SourceOutcome {
        let url = self.request_url(word);
        tracing::debug!(source = WORDS_API_SOURCE, url = %url, "Querying dictionary");

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request
                .header("X-RapidAPI-Key", key)
                .header("X-RapidAPI-Host", RAPIDAPI_HOST);
        }

        let result = fetch_json::<WordsApiResponse>(request)
            .await
            .map(|response| collect_candidates(&response));

        into_outcome(result)
    }
}

#[derive(Debug, Deserialize)]
struct WordsApiResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct WordsApiResult {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    examples: Option<Vec<Value>>,
}

/// One candidate per result among the first 3, when it has a definition
fn collect_candidates(response: &WordsApiResponse) -> Vec<DefinitionCandidate> {
    let results = response.results.as_deref().unwrap_or_default();

    decode_leading::<WordsApiResult>(results, MAX_RESULTS)
        .into_iter()
        .filter_map(|result| {
            DefinitionCandidate::new(
                result.part_of_speech.as_deref(),
                result.definition.clone()?,
                first_text(result.examples.as_deref()),
            )
        })
        .collect()
}
