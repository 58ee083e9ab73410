//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The dispatcher and slot store serve the conversation path; the handlers
//! serve the HTTP routes.

pub mod dispatcher;
pub mod handlers;
pub mod slot_store;

pub use dispatcher::Dispatcher;
pub use handlers::{
    // Conversation
    HandleActionCommand, HandleActionHandler,
    SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler, SendChatMessageResult,
    GetChatHistoryHandler, GetChatHistoryQuery, NLU_UNAVAILABLE_REPLY, NO_ANSWER_REPLY,
    // Catalog
    AccommodationCatalogHandler, CatalogError, DestinationCatalogHandler,
    // Travel info
    CompareDestinationsHandler, TravelInfoError,
};
pub use slot_store::{SlotGuard, SlotStore};
