//! HTTP handler for the chat endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::{
    GetChatHistoryHandler, GetChatHistoryQuery, SendChatMessageCommand, SendChatMessageError,
    SendChatMessageHandler,
};
use crate::domain::foundation::ConversationId;

use super::dto::{
    ChatHistoryItem, ChatHistoryParams, ChatHistoryResponse, ChatMessageRequest, ChatMessageResponse,
};

#[derive(Clone)]
pub struct ChatHandlers {
    send_message: Arc<SendChatMessageHandler>,
    history: Arc<GetChatHistoryHandler>,
}

impl ChatHandlers {
    pub fn new(send_message: Arc<SendChatMessageHandler>, history: Arc<GetChatHistoryHandler>) -> Self {
        Self {
            send_message,
            history,
        }
    }
}

/// POST /chat/message
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    OptionalAuth(user): OptionalAuth,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    // A blank session id means "start a new session".
    let session_id = match req.session_id.filter(|s| !s.trim().is_empty()) {
        Some(raw) => match ConversationId::new(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e)))
                    .into_response()
            }
        },
        None => None,
    };

    let cmd = SendChatMessageCommand {
        session_id,
        user_id: user.map(|u| u.id),
        message: req.message,
    };

    match handlers.send_message.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ChatMessageResponse::from(result))).into_response(),
        Err(SendChatMessageError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
    }
}

/// GET /chat/history/:session_id
pub async fn get_history(
    State(handlers): State<ChatHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(session_id): Path<String>,
    Query(params): Query<ChatHistoryParams>,
) -> Response {
    let session_id = match ConversationId::new(session_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
    };

    let query = GetChatHistoryQuery {
        session_id: session_id.clone(),
        limit: params.limit,
    };
    match handlers.history.handle(query).await {
        Ok(entries) => {
            let body = ChatHistoryResponse {
                session_id: session_id.into(),
                items: entries.into_iter().map(ChatHistoryItem::from).collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read chat history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Chat history unavailable")),
            )
                .into_response()
        }
    }
}
