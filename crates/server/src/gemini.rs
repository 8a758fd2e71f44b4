//! Gemini API client for the insight endpoints.
//!
//! The completion service is an opaque text-in/text-out capability behind
//! [`InsightService`]; tests substitute a stub. Uses a long-lived
//! `reqwest::Client` for connection pooling.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("insight service not configured")]
    Unconfigured,
    #[error("insight request failed: {0}")]
    Transport(String),
    #[error("insight response malformed: {0}")]
    Malformed(String),
}

/// Opaque text-completion capability.
#[async_trait]
pub trait InsightService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, InsightError>;
}

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Reusable Gemini client (connection-pooled).
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiClient {
    /// Builds a client for `model` (default model when `None`).
    ///
    /// An empty `api_key` is allowed; every completion then fails with
    /// [`InsightError::Unconfigured`], which callers relay as the fallback
    /// reply.
    pub fn new(api_key: String, model: Option<&str>) -> Result<Self, InsightError> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| InsightError::Transport(err.to_string()))?;

        let model = model.unwrap_or(DEFAULT_MODEL);
        Ok(Self {
            client,
            api_key,
            url: format!("{BASE_URL}/{model}:generateContent"),
        })
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[async_trait]
impl InsightService for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        if self.api_key.is_empty() {
            return Err(InsightError::Unconfigured);
        }

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}?key={}", self.url, self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("insight request failed: {err}");
                InsightError::Transport(err.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("insight service returned {status}");
            return Err(InsightError::Transport(format!(
                "service returned {status}"
            )));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|err| InsightError::Malformed(err.to_string()))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| InsightError::Malformed("no candidates in response".to_string()))
    }
}
