//! HandleActionHandler - runs one conversational turn.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::dispatcher::Dispatcher;
use crate::application::slot_store::SlotStore;
use crate::domain::conversation::{Reply, SlotValue, TurnRecorded};
use crate::domain::foundation::ConversationId;
use crate::ports::TranscriptPublisher;

/// Command carrying one recognized intent and the slot values extracted
/// from the latest utterance. `None` values clear the slot.
#[derive(Debug, Clone)]
pub struct HandleActionCommand {
    pub conversation_id: ConversationId,
    pub intent: String,
    pub slots: BTreeMap<String, Option<SlotValue>>,
}

/// Handler for action requests.
///
/// Holds the conversation's slot lock across merge, dispatch and mutation
/// apply. The turn event is published after the lock is released.
pub struct HandleActionHandler {
    slot_store: Arc<SlotStore>,
    dispatcher: Dispatcher,
    transcripts: Arc<dyn TranscriptPublisher>,
}

impl HandleActionHandler {
    pub fn new(
        slot_store: Arc<SlotStore>,
        dispatcher: Dispatcher,
        transcripts: Arc<dyn TranscriptPublisher>,
    ) -> Self {
        Self {
            slot_store,
            dispatcher,
            transcripts,
        }
    }

    pub async fn handle(&self, cmd: HandleActionCommand) -> Reply {
        let reply = {
            let mut slots = self.slot_store.lock(&cmd.conversation_id).await;
            slots.merge(cmd.slots);
            let reply = self.dispatcher.dispatch(&cmd.intent, &slots).await;
            slots.apply(&reply.slot_mutations);
            reply
        };

        tracing::info!(
            conversation_id = %cmd.conversation_id.as_str(),
            intent = %cmd.intent,
            mutations = reply.slot_mutations.len(),
            "Action handled"
        );

        let event = TurnRecorded::new(cmd.conversation_id, cmd.intent, reply.text.clone());
        // The publisher logs events it has to drop.
        self.transcripts.publish(event);

        reply
    }
}
