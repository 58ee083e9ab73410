//! Conversation domain: slots, intents, replies and their rendering.

pub mod budget;
mod intent;
pub mod message;
mod reply;
pub mod renderer;
pub mod slots;
mod transcript;

pub use intent::{IntentKind, IntentTable};
pub use message::UserMessage;
pub use renderer::{Payload, RenderContext};
pub use reply::Reply;
pub use slots::{SlotMutation, SlotSnapshot, SlotValue};
pub use transcript::{ChatExchange, ChatHistoryEntry, TurnRecorded, MAX_HISTORY_TEXT};
