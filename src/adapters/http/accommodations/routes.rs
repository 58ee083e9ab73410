//! HTTP routes for accommodation endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_accommodation, delete_accommodation, get_accommodation, list_accommodations,
    update_accommodation, AccommodationHandlers,
};

/// Creates the accommodation router, mounted at `/api/accommodations`.
pub fn accommodation_routes(handlers: AccommodationHandlers) -> Router {
    Router::new()
        .route("/", get(list_accommodations).post(create_accommodation))
        .route(
            "/:id",
            get(get_accommodation)
                .put(update_accommodation)
                .delete(delete_accommodation),
        )
        .with_state(handlers)
}
