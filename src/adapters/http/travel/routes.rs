//! HTTP routes for travel info endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    compare_destinations, emergency_info, practical_tips, travel_restrictions, TravelHandlers,
};

/// Creates the travel info router, mounted at `/api/travel`.
///
/// All routes are public; the conversation gateway calls them without a
/// user token.
pub fn travel_routes(handlers: TravelHandlers) -> Router {
    Router::new()
        .route("/compare", post(compare_destinations))
        .route("/emergency", get(emergency_info))
        .route("/tips", get(practical_tips))
        .route("/restrictions", get(travel_restrictions))
        .with_state(handlers)
}
