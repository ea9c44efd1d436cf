use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::ApiError;
use crate::genie::SessionStore;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Omit on the first turn; echo the returned id afterwards
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Bot reply", body = ChatResponse),
        (status = 400, description = "Invalid session id")
    )
)]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session_id = match payload.session_id {
        Some(id) => {
            SessionStore::validate_id(&id)?;
            id
        }
        None => SessionStore::new_session_id(),
    };

    let response = state.sessions.with_session(&session_id, |session| {
        state.responder.handle(session, &payload.message)
    });

    tracing::info!(session_id = %session_id, "Chat turn answered");

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}
