//! HTTP adapter for comparison and static travel reference data.

mod dto;
mod handlers;
mod routes;

pub use dto::{CompareRequest, DestinationParam};
pub use handlers::TravelHandlers;
pub use routes::travel_routes;
