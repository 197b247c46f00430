//! Dictionary Sources
//!
//! HTTP adapters for the public dictionaries behind definition lookup,
//! in priority order:
//!
//! 1. Wiktionary (community dictionary)
//! 2. Free Dictionary API
//! 3. WordsAPI

mod free_dictionary;
mod http;
mod wiktionary;
mod words_api;

pub use free_dictionary::{FreeDictionarySource, FREE_DICTIONARY_SOURCE};
pub use wiktionary::{WiktionarySource, WIKTIONARY_SOURCE};
pub use words_api::{WordsApiSource, WORDS_API_SOURCE};

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{DefinitionLookup, DomainError, DEFAULT_SOURCE_BUDGET};
use crate::ports::DefinitionSource;

/// Headroom the HTTP client gets over the source budget
const CLIENT_TIMEOUT_SLACK: Duration = Duration::from_secs(2);

/// Settings for the dictionary sources and the lookup built over them
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Wiktionary wiki to query (`en` → en.wiktionary.org)
    pub wiktionary_edition: String,
    /// Language group to read from the Wiktionary payload
    pub wiktionary_language: String,
    pub words_api_key: Option<String>,
    /// Time budget for each source inside a lookup
    pub source_budget: Duration,
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            wiktionary_edition: "en".to_string(),
            wiktionary_language: "en".to_string(),
            words_api_key: None,
            source_budget: DEFAULT_SOURCE_BUDGET,
            user_agent: format!("lexicard/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DictionaryConfig {
    /// Request timeout for the shared client
    ///
    /// Always outlasts the source budget so an overrun surfaces as a budget
    /// timeout rather than a transport error.
    pub fn client_timeout(&self) -> Duration {
        self.source_budget + CLIENT_TIMEOUT_SLACK
    }

    /// Shared HTTP client for all sources
    pub fn build_client(&self) -> Result<Client, DomainError> {
        Client::builder()
            .timeout(self.client_timeout())
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))
    }

    /// Sources in priority order, sharing one client
    pub fn sources(&self, client: Client) -> Vec<Arc<dyn DefinitionSource>> {
        vec![
            Arc::new(WiktionarySource::new(
                client.clone(),
                &self.wiktionary_edition,
                self.wiktionary_language.clone(),
            )),
            Arc::new(FreeDictionarySource::new(client.clone())),
            Arc::new(WordsApiSource::new(client, self.words_api_key.clone())),
        ]
    }

    /// Lookup over the default sources
    pub fn build_lookup(&self) -> Result<DefinitionLookup, DomainError> {
        let client = self.build_client()?;
        Ok(DefinitionLookup::new(self.sources(client)).with_source_budget(self.source_budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_order() {
        let lookup = DictionaryConfig::default().build_lookup().unwrap();
        assert_eq!(
            lookup.source_names(),
            vec![WIKTIONARY_SOURCE, FREE_DICTIONARY_SOURCE, WORDS_API_SOURCE]
        );
    }

    #[test]
    fn test_client_timeout_follows_source_budget() {
        let mut config = DictionaryConfig::default();
        assert_eq!(config.client_timeout(), Duration::from_secs(10));

        config.source_budget = Duration::from_secs(30);
        assert!(config.client_timeout() > config.source_budget);
        assert!(config.build_lookup().is_ok());
    }
}
