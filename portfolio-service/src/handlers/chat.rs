use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

/// Relay one visitor message to the chat provider.
///
/// The body is read raw so a missing or unparsable payload is reported as a
/// missing message.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request = ChatRequest::from_body(&body);
    let message = request
        .message()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Message is required")))?;

    let reply = state.chat.relay(message).await?;

    Ok(Json(ChatResponse { reply }))
}
