//! HTTP adapter for free-text chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatHistoryItem, ChatHistoryParams, ChatHistoryResponse, ChatMessageRequest, ChatMessageResponse,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
