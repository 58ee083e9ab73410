//! Accommodation repository port.

use async_trait::async_trait;

use crate::domain::catalog::{Accommodation, AccommodationDraft, AccommodationFilter, Listing, Page};
use crate::domain::foundation::{AccommodationId, DomainError};

/// Persistence for catalog accommodations.
#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    async fn create(&self, draft: &AccommodationDraft) -> Result<Accommodation, DomainError>;

    async fn find_by_id(&self, id: AccommodationId) -> Result<Option<Accommodation>, DomainError>;

    /// Filtered page ordered by id.
    async fn list(
        &self,
        filter: &AccommodationFilter,
        page: Page,
    ) -> Result<Listing<Accommodation>, DomainError>;

    async fn update(
        &self,
        id: AccommodationId,
        draft: &AccommodationDraft,
    ) -> Result<Option<Accommodation>, DomainError>;

    async fn delete(&self, id: AccommodationId) -> Result<bool, DomainError>;
}
