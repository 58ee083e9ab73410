//! HTTP handler for the action webhook.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::{HandleActionCommand, HandleActionHandler};
use crate::domain::foundation::ConversationId;

use super::dto::ActionRequest;

#[derive(Clone)]
pub struct ActionHandlers {
    handle_action: Arc<HandleActionHandler>,
}

impl ActionHandlers {
    pub fn new(handle_action: Arc<HandleActionHandler>) -> Self {
        Self { handle_action }
    }
}

/// POST /api/actions
///
/// Always answers 200 with a reply once the request is well formed;
/// downstream failures are already folded into the reply text.
pub async fn handle_action(
    State(handlers): State<ActionHandlers>,
    Json(req): Json<ActionRequest>,
) -> Response {
    let conversation_id = match ConversationId::new(req.conversation_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
    };

    let cmd = HandleActionCommand {
        conversation_id,
        intent: req.intent,
        slots: req.slots,
    };

    let reply = handlers.handle_action.handle(cmd).await;
    (StatusCode::OK, Json(reply)).into_response()
}
