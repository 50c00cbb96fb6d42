//! Chat Proxy — stateless, single-shot relay to the completion provider.
//!
//! The credential is looked up on every request through `CredentialSource`, so
//! adding or removing the key takes effect without a restart. The provider is
//! reached through `ChatBackend`; `AppState` carries both as trait objects.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::chat::prompts::{build_system_prompt, OFFLINE_REPLY};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where the provider API key comes from.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads `OPENAI_API_KEY` from the process environment on each call.
/// A blank value counts as absent.
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(OPENAI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// A completion provider. Implement this to swap providers without touching
/// the proxy or the handler.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        message: &str,
    ) -> Result<String, LlmError>;
}

#[async_trait]
impl ChatBackend for LlmClient {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        message: &str,
    ) -> Result<String, LlmError> {
        LlmClient::complete(self, api_key, system, message).await
    }
}

#[derive(Clone)]
pub struct ChatProxy {
    backend: Arc<dyn ChatBackend>,
    credentials: Arc<dyn CredentialSource>,
    system_prompt: String,
}

impl ChatProxy {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        credentials: Arc<dyn CredentialSource>,
        owner_name: &str,
    ) -> Self {
        Self {
            backend,
            credentials,
            system_prompt: build_system_prompt(owner_name),
        }
    }

    /// Produces the assistant reply for one visitor message.
    ///
    /// Empty message → `Validation`. No key → `OFFLINE_REPLY`. Provider failure →
    /// `Upstream` carrying the provider error text.
    pub async fn reply(&self, message: &str) -> Result<String, AppError> {
        if message.is_empty() {
            return Err(AppError::Validation("no message sent".to_string()));
        }

        let Some(api_key) = self.credentials.api_key() else {
            debug!("No API key configured, returning offline reply");
            return Ok(OFFLINE_REPLY.to_string());
        };

        self.backend
            .complete(&api_key, &self.system_prompt, message)
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}
