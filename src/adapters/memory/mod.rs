//! In-memory repository adapters.
//!
//! Back the handler and router test suites. Data does not survive a restart.

mod catalog;
mod chat_history;

pub use catalog::{InMemoryAccommodationRepository, InMemoryDestinationRepository};
pub use chat_history::InMemoryChatHistoryRepository;
