//! In-memory chat history.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::conversation::{ChatExchange, ChatHistoryEntry};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ChatHistoryRepository;

/// Append-only history kept in insertion order.
#[derive(Default)]
pub struct InMemoryChatHistoryRepository {
    entries: RwLock<Vec<ChatHistoryEntry>>,
}

impl InMemoryChatHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all sessions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistoryRepository {
    async fn append(&self, exchange: &ChatExchange) -> Result<ChatHistoryEntry, DomainError> {
        let mut entries = self.entries.write().await;
        let entry = ChatHistoryEntry {
            id: entries.len() as i64 + 1,
            exchange: exchange.clone(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn recent(
        &self,
        session_id: &ConversationId,
        limit: u32,
    ) -> Result<Vec<ChatHistoryEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut latest: Vec<ChatHistoryEntry> = entries
            .iter()
            .rev()
            .filter(|e| &e.exchange.session_id == session_id)
            .take(limit as usize)
            .cloned()
            .collect();
        latest.reverse();
        Ok(latest)
    }
}
