//! Conversation history: turn events and the chat records built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, UserId};

use super::message::truncate_chars;

/// Longest question or answer kept in history, in characters.
pub const MAX_HISTORY_TEXT: usize = 500;

/// Emitted after every dispatched turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecorded {
    pub conversation_id: ConversationId,
    pub intent: String,
    pub reply_text: String,
    pub occurred_at: DateTime<Utc>,
}

impl TurnRecorded {
    pub fn new(conversation_id: ConversationId, intent: impl Into<String>, reply_text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            intent: intent.into(),
            reply_text: reply_text.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// One question/answer pair ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub session_id: ConversationId,
    pub user_id: Option<UserId>,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl ChatExchange {
    /// Builds an exchange, truncating both texts to the history limit.
    pub fn new(
        session_id: ConversationId,
        user_id: Option<UserId>,
        question: &str,
        answer: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            user_id,
            question: truncate_chars(question, MAX_HISTORY_TEXT),
            answer: truncate_chars(answer, MAX_HISTORY_TEXT),
            created_at,
        }
    }
}

impl From<TurnRecorded> for ChatExchange {
    fn from(event: TurnRecorded) -> Self {
        ChatExchange::new(
            event.conversation_id,
            None,
            &event.intent,
            &event.reply_text,
            event.occurred_at,
        )
    }
}

/// A stored history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub id: i64,
    #[serde(flatten)]
    pub exchange: ChatExchange,
}
