//! Transcript channel - turn events from the action path to chat history.
//!
//! The publisher side never waits: when the bounded buffer is full the
//! event is dropped and `publish` reports it. The recorder drains the
//! channel in the background and writes each event as a chat exchange.
//! It stops once every publisher has been dropped and the buffer is empty.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::conversation::{ChatExchange, TurnRecorded};
use crate::ports::{ChatHistoryRepository, TranscriptPublisher};

/// Default number of buffered turn events.
pub const DEFAULT_TRANSCRIPT_CAPACITY: usize = 1024;

/// Creates a connected publisher/recorder pair.
pub fn transcript_channel(
    capacity: usize,
    history: Arc<dyn ChatHistoryRepository>,
) -> (ChannelTranscriptPublisher, TranscriptRecorder) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        ChannelTranscriptPublisher { sender },
        TranscriptRecorder { receiver, history },
    )
}

/// Non-blocking `TranscriptPublisher` over a bounded channel.
#[derive(Clone)]
pub struct ChannelTranscriptPublisher {
    sender: mpsc::Sender<TurnRecorded>,
}

impl TranscriptPublisher for ChannelTranscriptPublisher {
    fn publish(&self, event: TurnRecorded) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    conversation_id = %event.conversation_id.as_str(),
                    intent = %event.intent,
                    "Transcript buffer full, dropping turn event"
                );
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("Transcript recorder stopped, dropping turn event");
                false
            }
        }
    }
}

/// Background consumer persisting turn events.
pub struct TranscriptRecorder {
    receiver: mpsc::Receiver<TurnRecorded>,
    history: Arc<dyn ChatHistoryRepository>,
}

impl TranscriptRecorder {
    /// Runs until the channel is closed and drained. Returns the number of
    /// events stored.
    pub async fn run(mut self) -> u64 {
        let mut stored = 0;
        while let Some(event) = self.receiver.recv().await {
            let exchange = ChatExchange::from(event);
            match self.history.append(&exchange).await {
                Ok(_) => stored += 1,
                Err(e) => tracing::error!(
                    session_id = %exchange.session_id.as_str(),
                    error = %e,
                    "Failed to record turn"
                ),
            }
        }
        tracing::info!(stored, "Transcript recorder stopped");
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryChatHistoryRepository;
    use crate::domain::foundation::ConversationId;

    fn event(intent: &str) -> TurnRecorded {
        TurnRecorded::new(ConversationId::new("c1").unwrap(), intent, "reply")
    }

    #[tokio::test]
    async fn recorder_stores_published_events() {
        let history = Arc::new(InMemoryChatHistoryRepository::new());
        let (publisher, recorder) = transcript_channel(8, history.clone());

        assert!(publisher.publish(event("action_fallback")));
        assert!(publisher.publish(event("action_emergency_info")));
        drop(publisher);

        assert_eq!(recorder.run().await, 2);
        let stored = history.recent(&ConversationId::new("c1").unwrap(), 10).await.unwrap();
        assert_eq!(stored[0].exchange.question, "action_fallback");
        assert_eq!(stored[1].exchange.answer, "reply");
    }

    #[tokio::test]
    async fn full_buffer_drops_instead_of_blocking() {
        let history = Arc::new(InMemoryChatHistoryRepository::new());
        let (publisher, _recorder) = transcript_channel(1, history);

        assert!(publisher.publish(event("first")));
        assert!(!publisher.publish(event("second")));
    }

    #[tokio::test]
    async fn publishing_after_recorder_stopped_reports_drop() {
        let history = Arc::new(InMemoryChatHistoryRepository::new());
        let (publisher, recorder) = transcript_channel(4, history);
        drop(recorder);
        assert!(!publisher.publish(event("late")));
    }
}
