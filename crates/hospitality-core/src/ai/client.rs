//! HTTP client for the generative-AI service.
//!
//! Send a prompt and a JSON schema, get back JSON matching that schema.
//! Callers of [`AiClient::generate_json`]
//! receive `None` on any failure; there is no retry.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::AiConfig;

use super::AiError;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Client for the AI service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl AiClient {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: None,
        })
    }

    /// Same client and connection pool with the given key.
    pub fn with_key(&self, key: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: Some(key),
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Request JSON matching `schema`, surfacing every failure.
    pub async fn try_generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<T, AiError> {
        let key = self.api_key.as_deref().ok_or(AiError::MissingKey)?;

        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::from_status(status, &body));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .filter(|t: &String| !t.trim().is_empty())
            .ok_or_else(|| AiError::InvalidResponse("response had no text candidate".to_string()))?;

        debug!(model = %self.model, bytes = text.len(), "AI response received");
        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }

    /// Request JSON matching `schema`; `None` on any error.
    pub async fn generate_json<T: DeserializeOwned>(&self, prompt: &str, schema: &Value) -> Option<T> {
        match self.try_generate_json(prompt, schema).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(model = %self.model, error = %e, "AI generation failed");
                None
            }
        }
    }
}

/// Models sometimes wrap JSON in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
