//! Destination repository port.

use async_trait::async_trait;

use crate::domain::catalog::{Destination, DestinationDraft, DestinationFilter, Listing, Page};
use crate::domain::foundation::{DestinationId, DomainError};

/// Persistence for catalog destinations.
///
/// Drafts passed in are already validated. Lookups by a missing id return
/// `None` (or `false` for delete) rather than an error.
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Stores a new destination and returns it with its assigned id.
    async fn create(&self, draft: &DestinationDraft) -> Result<Destination, DomainError>;

    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, DomainError>;

    /// First destination whose name contains `name`, case-insensitively.
    async fn find_by_name(&self, name: &str) -> Result<Option<Destination>, DomainError>;

    /// Filtered page ordered by id.
    async fn list(&self, filter: &DestinationFilter, page: Page) -> Result<Listing<Destination>, DomainError>;

    /// Replaces every writable field. `None` when the id does not exist.
    async fn update(
        &self,
        id: DestinationId,
        draft: &DestinationDraft,
    ) -> Result<Option<Destination>, DomainError>;

    /// Returns false when the id does not exist.
    async fn delete(&self, id: DestinationId) -> Result<bool, DomainError>;
}
