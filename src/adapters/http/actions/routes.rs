//! HTTP routes for the action webhook.

use axum::{routing::post, Router};

use super::handlers::{handle_action, ActionHandlers};

/// Creates the action router, mounted at `/api/actions`.
pub fn action_routes(handlers: ActionHandlers) -> Router {
    Router::new()
        .route("/", post(handle_action))
        .with_state(handlers)
}
