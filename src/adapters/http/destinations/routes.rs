//! HTTP routes for destination endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_destination, delete_destination, get_destination, list_destinations, update_destination,
    DestinationHandlers,
};

/// Creates the destination router, mounted at `/api/destinations`.
pub fn destination_routes(handlers: DestinationHandlers) -> Router {
    Router::new()
        .route("/", get(list_destinations).post(create_destination))
        .route(
            "/:id",
            get(get_destination)
                .put(update_destination)
                .delete(delete_destination),
        )
        .with_state(handlers)
}
