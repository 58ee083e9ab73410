//! Chat proxy handlers.

mod get_chat_history;
mod send_chat_message;

pub use get_chat_history::{GetChatHistoryHandler, GetChatHistoryQuery};
pub use send_chat_message::{
    SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler, SendChatMessageResult,
    NLU_UNAVAILABLE_REPLY, NO_ANSWER_REPLY,
};
