//! HTTP adapter for the accommodation catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{AccommodationListResponse, ListAccommodationsQuery};
pub use handlers::AccommodationHandlers;
pub use routes::accommodation_routes;
