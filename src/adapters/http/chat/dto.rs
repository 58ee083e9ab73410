//! DTOs for the chat endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::SendChatMessageResult;
use crate::domain::conversation::ChatHistoryEntry;

/// Body of POST /chat/message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub response: String,
    pub session_id: String,
}

impl From<SendChatMessageResult> for ChatMessageResponse {
    fn from(result: SendChatMessageResult) -> Self {
        Self {
            response: result.response,
            session_id: result.session_id.into(),
        }
    }
}

/// Query string of GET /chat/history/:session_id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistoryParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatHistoryEntry> for ChatHistoryItem {
    fn from(entry: ChatHistoryEntry) -> Self {
        Self {
            id: entry.id,
            question: entry.exchange.question,
            answer: entry.exchange.answer,
            created_at: entry.exchange.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub items: Vec<ChatHistoryItem>,
}
