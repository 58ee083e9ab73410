//! HTTP adapter for the conversation action webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::ActionRequest;
pub use handlers::ActionHandlers;
pub use routes::action_routes;
