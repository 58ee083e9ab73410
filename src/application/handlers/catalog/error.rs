use thiserror::Error;

use crate::domain::foundation::{AccommodationId, DestinationId, DomainError, ValidationError};

/// Errors returned by the catalog command and query handlers.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Destination not found: {0}")]
    DestinationNotFound(DestinationId),

    #[error("Accommodation not found: {0}")]
    AccommodationNotFound(AccommodationId),

    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}
