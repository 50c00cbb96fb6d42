//! Axum route handler for the chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat
///
/// A missing or unparseable body is treated like an empty message.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Option<Json<ChatRequest>>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let message = request.message.unwrap_or_default();

    let reply = state.chat.reply(&message).await?;

    Ok(Json(ChatResponse { reply }))
}
