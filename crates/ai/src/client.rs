//! Outbound inference clients.
//!
//! [`GeminiClient`] talks to the generative-language REST API with [`reqwest`].
//! [`ScriptedInferenceClient`] answers from a fixed table and is meant for
//! tests and offline demos.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use crate::config::ForecastConfig;
use crate::result::AiError;

/// One structured-output request.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub prompt: String,
    pub response_schema: JsonValue,
}

/// A text-generation backend that answers with JSON text.
///
/// Implementations return the raw model text; parsing happens in the service.
#[async_trait]
pub trait InferenceClient: Send + Sync + 'static {
    async fn generate_json(&self, request: &InferenceRequest) -> Result<String, AiError>;
}

/// HTTP client for the `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &ForecastConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, config: &ForecastConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.inference_model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(request: &InferenceRequest) -> JsonValue {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
            },
        })
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AiError::Provider {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Concatenated text parts of the first candidate.
fn first_candidate_text(response: GenerateContentResponse) -> Result<String, AiError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn generate_json(&self, request: &InferenceRequest) -> Result<String, AiError> {
        // The key is sent even when empty; the provider's rejection is the signal.
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(request))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body: GenerateContentResponse = response.json().await?;
        first_candidate_text(body)
    }
}

/// Canned answers keyed by item name.
///
/// A request matches an entry when its prompt contains `Item: <name>` on its
/// own line. Unmatched requests get the default answer, a transport error
/// unless overridden.
#[derive(Debug)]
pub struct ScriptedInferenceClient {
    answers: HashMap<String, Result<String, AiError>>,
    default: Result<String, AiError>,
    calls: Mutex<Vec<String>>,
}

impl Default for ScriptedInferenceClient {
    fn default() -> Self {
        Self {
            answers: HashMap::new(),
            default: Err(AiError::Transport("no scripted answer".to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedInferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, item_name: impl Into<String>, answer: Result<String, AiError>) -> Self {
        self.answers.insert(item_name.into(), answer);
        self
    }

    pub fn otherwise(mut self, answer: Result<String, AiError>) -> Self {
        self.default = answer;
        self
    }

    /// Prompts received so far, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl InferenceClient for ScriptedInferenceClient {
    async fn generate_json(&self, request: &InferenceRequest) -> Result<String, AiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.prompt.clone());
        }

        let answer = request
            .prompt
            .lines()
            .find_map(|line| line.strip_prefix("Item: "))
            .and_then(|name| self.answers.get(name));

        answer.unwrap_or(&self.default).clone()
    }
}
