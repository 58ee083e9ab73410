//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod actions;
mod catalog;
mod chat;
mod travel_info;

pub use actions::{HandleActionCommand, HandleActionHandler};
pub use catalog::{AccommodationCatalogHandler, CatalogError, DestinationCatalogHandler};
pub use chat::{
    GetChatHistoryHandler, GetChatHistoryQuery,
    SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler, SendChatMessageResult,
    NLU_UNAVAILABLE_REPLY, NO_ANSWER_REPLY,
};
pub use travel_info::{CompareDestinationsHandler, TravelInfoError};
