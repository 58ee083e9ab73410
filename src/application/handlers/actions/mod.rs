//! Conversational action handlers.

mod handle_action;

pub use handle_action::{HandleActionCommand, HandleActionHandler};
