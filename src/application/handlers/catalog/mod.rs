//! Catalog command and query handlers.

mod accommodations;
mod destinations;
mod error;

pub use accommodations::AccommodationCatalogHandler;
pub use destinations::DestinationCatalogHandler;
pub use error::CatalogError;
