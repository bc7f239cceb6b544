//! Axum route handlers for the advisor chat.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::conversation::pacing::schedule_reply;
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, Sender};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub message: ChatMessage,
    pub reply_delay_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub cancelled: usize,
}

fn chat_locked() -> AppError {
    AppError::Conflict("Complete your profile before chatting with the advisor".to_string())
}

/// GET /api/v1/sessions/:id/chat
pub async fn handle_get_conversation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationResponse>, AppError> {
    let log = state
        .sessions
        .with_session(id, |session| session.conversation())?
        .ok_or_else(chat_locked)?;

    Ok(Json(ConversationResponse {
        messages: log.messages(),
        typing: log.is_typing(),
    }))
}

/// POST /api/v1/sessions/:id/chat
///
/// Appends the user message and schedules the reply. Returns 202 immediately;
/// the reply shows up in the conversation once the pacing delay elapses.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>), AppError> {
    let content = request.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }

    let sampled = state.reply_delay.sample(state.rng.as_ref());

    let (message, delay) = state.sessions.with_session(id, |session| {
        let log = session.conversation().ok_or_else(chat_locked)?;
        let profile = session.profile().cloned();
        let message = log.append(Sender::User, content);
        let reply = schedule_reply(
            log,
            state.advisor.clone(),
            profile,
            content.to_string(),
            sampled,
        );
        session.track_reply(reply.abort_handle());
        Ok::<_, AppError>((message, reply.delay()))
    })??;

    let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    info!(session_id = %id, message_id = message.id, delay_ms, "reply scheduled");

    Ok((
        StatusCode::ACCEPTED,
        Json(SendMessageResponse {
            message,
            reply_delay_ms: delay_ms,
        }),
    ))
}

/// DELETE /api/v1/sessions/:id/chat/pending
///
/// Cancels replies that have not been appended yet.
pub async fn handle_cancel_pending(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CancelResponse>, AppError> {
    let cancelled = state
        .sessions
        .with_session(id, |session| session.cancel_pending())?;

    if cancelled > 0 {
        info!(session_id = %id, cancelled, "pending replies cancelled");
    }

    Ok(Json(CancelResponse { cancelled }))
}
