//! Destination catalog commands and queries.

use std::sync::Arc;

use crate::domain::catalog::{Destination, DestinationDraft, DestinationFilter, Listing, Page};
use crate::domain::foundation::DestinationId;
use crate::ports::DestinationRepository;

use super::CatalogError;

/// Handles create, read, update and delete for destinations.
pub struct DestinationCatalogHandler {
    repo: Arc<dyn DestinationRepository>,
}

impl DestinationCatalogHandler {
    pub fn new(repo: Arc<dyn DestinationRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: DestinationDraft) -> Result<Destination, CatalogError> {
        let draft = draft.validated()?;
        let destination = self.repo.create(&draft).await?;
        tracing::info!(destination_id = %destination.id, name = %destination.details.name, "Destination created");
        Ok(destination)
    }

    pub async fn get(&self, id: DestinationId) -> Result<Destination, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::DestinationNotFound(id))
    }

    pub async fn list(
        &self,
        filter: DestinationFilter,
        page: Page,
    ) -> Result<Listing<Destination>, CatalogError> {
        Ok(self.repo.list(&filter, page).await?)
    }

    /// Full replacement of the writable fields.
    pub async fn update(
        &self,
        id: DestinationId,
        draft: DestinationDraft,
    ) -> Result<Destination, CatalogError> {
        let draft = draft.validated()?;
        let updated = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(CatalogError::DestinationNotFound(id))?;
        tracing::info!(destination_id = %id, "Destination updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: DestinationId) -> Result<(), CatalogError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogError::DestinationNotFound(id));
        }
        tracing::info!(destination_id = %id, "Destination deleted");
        Ok(())
    }
}
