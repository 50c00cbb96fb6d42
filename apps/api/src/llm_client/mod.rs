/// LLM Client — the single point of entry for chat-completion calls.
///
/// No other module talks to the completion provider directly; the chat proxy
/// reaches it through the `ChatBackend` trait.
///
/// Calls are single-shot: one request, no retry, no backoff. Whatever the provider
/// says on failure is surfaced to the caller.
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f64 = 0.2;
const HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM response contained no message content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the provider sent any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Thin wrapper over an OpenAI-compatible `/chat/completions` endpoint.
/// The API key is passed per call; the client itself holds no credential.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system + user turn and returns the raw response object.
    pub async fn call(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }

    /// Calls the model and returns the trimmed reply text. A reply that trims to
    /// nothing is returned as `""`; only a missing choice or content is an error.
    pub async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let response = self.call(api_key, system, prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn stub_completions(
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer sk-test" {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": { "message": "Incorrect API key provided" } })),
            );
        }

        let user = body["messages"][1]["content"].as_str().unwrap_or_default();
        if user == "nothing" {
            return (StatusCode::OK, Json(json!({ "choices": [] })));
        }
        if user == "silence" {
            return (
                StatusCode::OK,
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": "   " } }] })),
            );
        }

        // Echo the request shape back so the caller can assert on it.
        let reply = format!(
            "  {}|{}|{}|{}|{}  ",
            body["model"].as_str().unwrap_or_default(),
            body["max_tokens"],
            body["temperature"],
            body["messages"][0]["role"].as_str().unwrap_or_default(),
            user,
        );
        (
            StatusCode::OK,
            Json(json!({
                "choices": [{ "message": { "role": "assistant", "content": reply } }],
                "usage": { "prompt_tokens": 12, "completion_tokens": 5 }
            })),
        )
    }

    async fn spawn_stub() -> String {
        let app = Router::new().route("/v1/chat/completions", post(stub_completions));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    #[tokio::test]
    async fn test_complete_sends_single_turn_and_trims_reply() {
        let base_url = spawn_stub().await;
        let client = LlmClient::new(base_url, "gpt-4o-mini").unwrap();

        let reply = client
            .complete("sk-test", "be brief", "hello")
            .await
            .unwrap();
        assert_eq!(reply, "gpt-4o-mini|300|0.2|system|hello");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let base_url = spawn_stub().await;
        let client = LlmClient::new(base_url, "gpt-4o-mini").unwrap();

        let err = client
            .complete("sk-wrong", "be brief", "hello")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_reply_is_returned_empty() {
        let base_url = spawn_stub().await;
        let client = LlmClient::new(base_url, "gpt-4o-mini").unwrap();

        let reply = client
            .complete("sk-test", "be brief", "silence")
            .await
            .unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_missing_choice_is_empty_content() {
        let base_url = spawn_stub().await;
        let client = LlmClient::new(base_url, "gpt-4o-mini").unwrap();

        let err = client
            .complete("sk-test", "be brief", "nothing")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = LlmClient::new(format!("http://{addr}/v1"), "gpt-4o-mini").unwrap();
        let err = client.complete("sk-test", "sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }

    #[test]
    fn test_text_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_text_is_none_without_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(response.text().is_none());
    }
}
