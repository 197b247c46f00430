//! Configuration management for Lexicard CLI
//!
//! Stores API key, server URL, default subject and dictionary settings in
//! ~/.config/lexicard/config.toml. `LEXICARD_API_KEY` and `LEXICARD_BASE_URL`
//! override the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use lexicard::DictionaryConfig;

const CONFIG_DIR: &str = "lexicard";
const CONFIG_FILE: &str = "config.toml";

pub const API_KEY_ENV: &str = "LEXICARD_API_KEY";
pub const BASE_URL_ENV: &str = "LEXICARD_BASE_URL";

/// Dictionary settings for local lookups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Wiktionary edition and language section, e.g. "en"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiktionary_edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_api_key: Option<String>,
    /// Per-dictionary time budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subject: Option<String>,
    #[serde(default)]
    pub lookup: LookupSettings,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_subject: None,
            lookup: LookupSettings::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Persist an API key without writing environment overrides to disk
    pub fn store_api_key(key: String) -> Result<()> {
        let mut config = Self::load_file()?;
        config.set_api_key(key);
        config.save()
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Environment overrides; blank values are ignored
    pub fn apply_overrides<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = get(BASE_URL_ENV) {
            self.base_url = url;
        }
    }

    /// Subject to use when none is given on the command line
    pub fn subject_or_default(&self, subject: Option<String>) -> Option<String> {
        subject.or_else(|| self.default_subject.clone())
    }

    /// Dictionary settings for the local lookup orchestrator
    pub fn dictionary_config(&self) -> DictionaryConfig {
        let mut dictionary = DictionaryConfig::default();
        if let Some(edition) = &self.lookup.wiktionary_edition {
            dictionary.wiktionary_edition = edition.clone();
            dictionary.wiktionary_language = edition.clone();
        }
        dictionary.words_api_key = self.lookup.words_api_key.clone();
        if let Some(secs) = self.lookup.timeout_secs.filter(|secs| *secs > 0) {
            dictionary.source_budget = Duration::from_secs(secs);
        }
        dictionary
    }
}
