//! Chat history repository port.

use async_trait::async_trait;

use crate::domain::conversation::{ChatExchange, ChatHistoryEntry};
use crate::domain::foundation::{ConversationId, DomainError};

/// Append-only store of question/answer exchanges.
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    async fn append(&self, exchange: &ChatExchange) -> Result<ChatHistoryEntry, DomainError>;

    /// Most recent exchanges of one session, oldest first.
    async fn recent(
        &self,
        session_id: &ConversationId,
        limit: u32,
    ) -> Result<Vec<ChatHistoryEntry>, DomainError>;
}
