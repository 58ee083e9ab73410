//! SendChatMessageHandler - proxies free text to the NLU engine.
//!
//! The message is screened first. Engine failures never surface to the
//! caller; they become a fixed apology that is recorded like any answer.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::{ChatExchange, UserMessage};
use crate::domain::foundation::{ConversationId, UserId, ValidationError};
use crate::ports::{ChatHistoryRepository, NluClient};

/// Reply used when the engine is unavailable.
pub const NLU_UNAVAILABLE_REPLY: &str =
    "Sorry, the assistant is unavailable right now. Please try again in a moment.";
/// Reply used when the engine answered without any text.
pub const NO_ANSWER_REPLY: &str = "No answer available.";

/// Command to send one chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    /// Session to continue; a new one is generated when absent.
    pub session_id: Option<ConversationId>,
    pub user_id: Option<UserId>,
    pub message: String,
}

/// Result of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatMessageResult {
    pub response: String,
    pub session_id: ConversationId,
}

#[derive(Debug, Clone, Error)]
pub enum SendChatMessageError {
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),
}

/// Handler for chat messages.
pub struct SendChatMessageHandler {
    nlu: Arc<dyn NluClient>,
    history: Arc<dyn ChatHistoryRepository>,
}

impl SendChatMessageHandler {
    pub fn new(nlu: Arc<dyn NluClient>, history: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { nlu, history }
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, SendChatMessageError> {
        let message = UserMessage::parse(&cmd.message)?;
        let session_id = cmd.session_id.unwrap_or_else(ConversationId::generate);

        let response = match self.nlu.send(&session_id, &message).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_ANSWER_REPLY.to_string(),
            Err(e) => {
                tracing::warn!(session_id = %session_id.as_str(), error = %e, "NLU request failed");
                NLU_UNAVAILABLE_REPLY.to_string()
            }
        };

        let exchange = ChatExchange::new(
            session_id.clone(),
            cmd.user_id,
            message.as_str(),
            &response,
            Utc::now(),
        );
        // History is best effort; the user still gets the answer.
        if let Err(e) = self.history.append(&exchange).await {
            tracing::error!(session_id = %session_id.as_str(), error = %e, "Failed to record chat history");
        }

        Ok(SendChatMessageResult {
            response,
            session_id,
        })
    }
}
