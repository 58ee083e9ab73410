//! NLU client port - forwards free text to the conversational engine.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::UserMessage;
use crate::domain::foundation::ConversationId;

/// Why the NLU engine produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NluError {
    #[error("NLU request timed out")]
    Timeout,

    #[error("NLU server unreachable: {0}")]
    Unreachable(String),

    #[error("NLU server returned status {0}")]
    BadStatus(u16),

    #[error("NLU response could not be decoded")]
    InvalidResponse,
}

/// Sends one user message and returns the engine's joined reply texts.
///
/// `Ok(None)` means the engine answered with no text at all.
#[async_trait]
pub trait NluClient: Send + Sync {
    async fn send(
        &self,
        sender: &ConversationId,
        message: &UserMessage,
    ) -> Result<Option<String>, NluError>;
}
