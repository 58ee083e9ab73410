//! GetChatHistoryHandler - reads back the latest exchanges of a session.

use std::sync::Arc;

use crate::domain::conversation::ChatHistoryEntry;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ChatHistoryRepository;

/// Entries returned when the caller gives no limit.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
/// Upper bound on entries per request.
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Query for one session's history.
#[derive(Debug, Clone)]
pub struct GetChatHistoryQuery {
    pub session_id: ConversationId,
    pub limit: Option<u32>,
}

pub struct GetChatHistoryHandler {
    history: Arc<dyn ChatHistoryRepository>,
}

impl GetChatHistoryHandler {
    pub fn new(history: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { history }
    }

    /// Oldest first. The limit is clamped to `1..=MAX_HISTORY_LIMIT`.
    pub async fn handle(&self, query: GetChatHistoryQuery) -> Result<Vec<ChatHistoryEntry>, DomainError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);
        self.history.recent(&query.session_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryChatHistoryRepository;
    use crate::domain::conversation::ChatExchange;
    use chrono::Utc;

    async fn seeded(session: &str, count: usize) -> Arc<InMemoryChatHistoryRepository> {
        let repo = Arc::new(InMemoryChatHistoryRepository::new());
        let session_id = ConversationId::new(session).unwrap();
        for i in 0..count {
            let exchange = ChatExchange::new(
                session_id.clone(),
                None,
                &format!("question {}", i),
                "answer",
                Utc::now(),
            );
            repo.append(&exchange).await.unwrap();
        }
        repo
    }

    fn query(session: &str, limit: Option<u32>) -> GetChatHistoryQuery {
        GetChatHistoryQuery {
            session_id: ConversationId::new(session).unwrap(),
            limit,
        }
    }

    #[tokio::test]
    async fn default_limit_applies() {
        let handler = GetChatHistoryHandler::new(seeded("s1", 25).await);

        let entries = handler.handle(query("s1", None)).await.unwrap();

        assert_eq!(entries.len(), DEFAULT_HISTORY_LIMIT as usize);
        assert_eq!(entries.last().unwrap().exchange.question, "question 24");
    }

    #[tokio::test]
    async fn zero_limit_still_returns_latest_entry() {
        let handler = GetChatHistoryHandler::new(seeded("s1", 3).await);

        let entries = handler.handle(query("s1", Some(0))).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].exchange.question, "question 2");
    }

    #[tokio::test]
    async fn other_sessions_are_not_returned() {
        let handler = GetChatHistoryHandler::new(seeded("s1", 3).await);

        let entries = handler.handle(query("s2", None)).await.unwrap();

        assert!(entries.is_empty());
    }
}
