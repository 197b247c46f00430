//! Lexicard API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Lexicard
pub struct LexicardClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct VocabEntryResponse {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct VocabListResponse {
    pub subject: String,
    pub count: usize,
    pub entries: Vec<VocabEntryResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreateVocabRequest {
    pub word: String,
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub subject: String,
}

impl LexicardClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test the key against an authenticated route
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Ok(false);
        }

        // /health is public, so also hit a protected route
        let url = format!("{}/lexicard/vocab", self.base_url);
        let resp = self.authorized(self.client.get(&url)).send().await?;
        Ok(resp.status().is_success())
    }

    /// List vocab entries, optionally filtered by subject
    pub async fn list_vocab(&self, subject: Option<&str>) -> Result<VocabListResponse> {
        let url = format!("{}/lexicard/vocab", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(subject) = subject {
            request = request.query(&[("subject", subject)]);
        }

        let resp = self
            .authorized(request)
            .send()
            .await
            .context("Failed to connect to Lexicard API")?;

        read_json(resp).await
    }

    /// Add a vocab entry
    pub async fn add_vocab(&self, request: &CreateVocabRequest) -> Result<VocabEntryResponse> {
        let url = format!("{}/lexicard/vocab", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Lexicard API")?;

        read_json(resp).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.api_key))
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}
