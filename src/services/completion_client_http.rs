//! Completion backend client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::config::{self, BackendConfig};
use crate::domain::{AppError, BackendError};
use crate::ports::{CompletionClient, CompletionRequest};

/// HTTP client for an OpenAI-style chat-completions endpoint.
///
/// One blocking round trip per call; no retry. Absence of retry is a
/// preserved contract of the pipeline, not an omission.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(config: &BackendConfig) -> Result<Self, AppError> {
        Self::new(config::resolve_api_key()?, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, BackendError> {
        let api_request = ApiRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| ApiMessage { role: m.role.as_str(), content: &m.content })
                .collect(),
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let api_response: ApiResponse =
                response.json().map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

            api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|content| !content.is_empty())
                .ok_or(BackendError::EmptyCompletion)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            let message = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(BackendError::Auth { status: status.as_u16(), message })
        } else if status.as_u16() == 429 {
            Err(BackendError::RateLimited)
        } else if status.is_server_error() {
            Err(BackendError::Server(status.as_u16()))
        } else {
            let message = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(BackendError::Api { status: status.as_u16(), message })
        }
    }
}
