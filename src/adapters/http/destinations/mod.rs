//! HTTP adapter for the destination catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{DestinationListResponse, DestinationRequest, DestinationResponse, ListDestinationsQuery};
pub use handlers::DestinationHandlers;
pub use routes::destination_routes;
