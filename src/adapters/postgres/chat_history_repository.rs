//! PostgreSQL implementation of ChatHistoryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::conversation::{ChatExchange, ChatHistoryEntry};
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use crate::ports::ChatHistoryRepository;

/// PostgreSQL implementation of ChatHistoryRepository.
#[derive(Clone)]
pub struct PostgresChatHistoryRepository {
    pool: PgPool,
}

impl PostgresChatHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatHistoryRepository for PostgresChatHistoryRepository {
    async fn append(&self, exchange: &ChatExchange) -> Result<ChatHistoryEntry, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO chat_history (session_id, user_id, question, answer, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(exchange.session_id.as_str())
        .bind(exchange.user_id.as_ref().map(UserId::as_str))
        .bind(&exchange.question)
        .bind(&exchange.answer)
        .bind(exchange.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert chat history", e))?;

        Ok(ChatHistoryEntry {
            id,
            exchange: exchange.clone(),
        })
    }

    async fn recent(
        &self,
        session_id: &ConversationId,
        limit: u32,
    ) -> Result<Vec<ChatHistoryEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_id, question, answer, created_at
            FROM (
                SELECT * FROM chat_history
                WHERE session_id = $1
                ORDER BY created_at DESC, id DESC
                LIMIT $2
            ) latest
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(session_id.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch chat history", e))?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: &PgRow) -> Result<ChatHistoryEntry, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::database("Failed to decode chat history row", e);

    let session_id: String = row.try_get("session_id").map_err(map_err)?;
    let user_id: Option<String> = row.try_get("user_id").map_err(map_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_err)?;

    Ok(ChatHistoryEntry {
        id: row.try_get("id").map_err(map_err)?,
        exchange: ChatExchange {
            session_id: ConversationId::new(session_id)?,
            user_id: user_id.map(UserId::new).transpose()?,
            question: row.try_get("question").map_err(map_err)?,
            answer: row.try_get("answer").map_err(map_err)?,
            created_at,
        },
    })
}
