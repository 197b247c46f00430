//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml`) at startup.

use std::time::Duration;
use thiserror::Error;

use lexicard::DictionaryConfig;

pub const API_KEY: &str = "LEXICARD_API_KEY";
pub const WIKTIONARY_EDITION: &str = "WIKTIONARY_EDITION";
pub const WIKTIONARY_LANGUAGE: &str = "WIKTIONARY_LANGUAGE";
pub const WORDS_API_KEY: &str = "WORDS_API_KEY";
pub const LOOKUP_TIMEOUT_SECS: &str = "LOOKUP_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Bearer token required on API routes; `None` disables auth
    pub api_key: Option<String>,
    pub dictionary: DictionaryConfig,
}

impl ServerConfig {
    /// Build from a key lookup (usually `SecretStore::get`)
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|value| !value.trim().is_empty());

        let mut dictionary = DictionaryConfig::default();
        if let Some(edition) = get(WIKTIONARY_EDITION) {
            dictionary.wiktionary_edition = edition;
        }
        if let Some(language) = get(WIKTIONARY_LANGUAGE) {
            dictionary.wiktionary_language = language;
        }
        dictionary.words_api_key = get(WORDS_API_KEY);

        if let Some(raw) = get(LOOKUP_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: LOOKUP_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            dictionary.source_budget = Duration::from_secs(secs);
        }

        Ok(Self {
            api_key: get(API_KEY),
            dictionary,
        })
    }
}
