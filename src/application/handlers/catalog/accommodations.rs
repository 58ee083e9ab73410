//! Accommodation catalog commands and queries.

use std::sync::Arc;

use crate::domain::catalog::{Accommodation, AccommodationDraft, AccommodationFilter, Listing, Page};
use crate::domain::foundation::AccommodationId;
use crate::ports::AccommodationRepository;

use super::CatalogError;

/// Handles create, read, update and delete for accommodations.
pub struct AccommodationCatalogHandler {
    repo: Arc<dyn AccommodationRepository>,
}

impl AccommodationCatalogHandler {
    pub fn new(repo: Arc<dyn AccommodationRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: AccommodationDraft) -> Result<Accommodation, CatalogError> {
        let draft = draft.validated()?;
        let accommodation = self.repo.create(&draft).await?;
        tracing::info!(accommodation_id = %accommodation.id, "Accommodation created");
        Ok(accommodation)
    }

    pub async fn get(&self, id: AccommodationId) -> Result<Accommodation, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::AccommodationNotFound(id))
    }

    pub async fn list(
        &self,
        filter: AccommodationFilter,
        page: Page,
    ) -> Result<Listing<Accommodation>, CatalogError> {
        Ok(self.repo.list(&filter, page).await?)
    }

    pub async fn update(
        &self,
        id: AccommodationId,
        draft: AccommodationDraft,
    ) -> Result<Accommodation, CatalogError> {
        let draft = draft.validated()?;
        let updated = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(CatalogError::AccommodationNotFound(id))?;
        tracing::info!(accommodation_id = %id, "Accommodation updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: AccommodationId) -> Result<(), CatalogError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogError::AccommodationNotFound(id));
        }
        tracing::info!(accommodation_id = %id, "Accommodation deleted");
        Ok(())
    }
}
