//! Chatbot handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use recircle_core::chat;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireSession;
use crate::state::AppState;

/// Chat message form.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

/// One exchange, appended to the chat log.
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_reply.html")]
pub struct ChatReplyTemplate {
    pub message: String,
    pub reply: String,
}

/// Answer a chat message.
///
/// The backend chatbot is asked first; the built-in responder answers if it
/// cannot be reached.
#[instrument(skip_all)]
pub async fn send(
    _guard: RequireSession,
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<ChatReplyTemplate> {
    let message = form.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let reply = match state.api().chat(message).await {
        Ok(reply) if !reply.response.trim().is_empty() => reply.response,
        Ok(_) => chat::respond(message).to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "Backend chatbot unavailable, answering locally");
            chat::respond(message).to_string()
        }
    };

    Ok(ChatReplyTemplate {
        message: message.to_string(),
        reply,
    })
}
