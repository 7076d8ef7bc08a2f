//! HTTP completion client for OpenAI-compatible chat endpoints.
//!
//! One struct covers every OpenAI-style API (Groq, OpenAI, Ollama,
//! llama.cpp, Anthropic-compatible proxies); deployments differ only by
//! endpoint URL, API key, and model name. Responses are accepted in the
//! handful of shapes these servers actually return.

use std::time::Duration;

use async_trait::async_trait;
use ragboost_core::error::{Error, Result};
use ragboost_core::traits::CompletionProvider;
use serde_json::{json, Value};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 500;

pub struct HttpCompletionProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl HttpCompletionProvider {
    /// `api_key` may be empty for local servers; the Authorization header
    /// is then omitted entirely.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Provider(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_prompt(context: Option<&str>, question: &str) -> String {
        match context {
            Some(context) => format!(
                "Context (from chunk memory):\n{context}\n\nQuestion: {question}\n\nAnswer based on the context above:"
            ),
            None => question.to_string(),
        }
    }
}

/// Pull the answer text out of whichever response shape the server used:
/// OpenAI/Groq `choices`, Anthropic `content` (string or block list),
/// Ollama `response`, or a bare `message`.
fn extract_answer(data: &Value) -> Option<String> {
    if let Some(text) = data
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
    {
        return Some(text.to_string());
    }
    match data.get("content") {
        Some(Value::String(text)) => return Some(text.clone()),
        Some(Value::Array(blocks)) => {
            if let Some(text) = blocks.first().and_then(|b| b.get("text")).and_then(Value::as_str) {
                return Some(text.to_string());
            }
        }
        _ => {}
    }
    if let Some(text) = data.get("response").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    if let Some(text) = data.pointer("/message/content").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    None
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, context: Option<&str>, question: &str) -> Result<String> {
        let prompt = Self::build_prompt(context, question);
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let mut request = self.client.post(&self.api_url).json(&body);
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        tracing::debug!(model = %self.model, url = %self.api_url, "sending completion request");
        let response = request
            .send()
            .await
            .map_err(|e| Error::Provider(format!("request to {} failed: {e}", self.api_url)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "{} returned {status}: {detail}",
                self.api_url
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("malformed response body: {e}")))?;
        extract_answer(&data)
            .ok_or_else(|| Error::Provider(format!("unrecognized response shape: {data}")))
    }
}
