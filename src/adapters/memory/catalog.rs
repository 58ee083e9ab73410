//! In-memory catalog repositories.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::catalog::{
    Accommodation, AccommodationDraft, AccommodationFilter, Destination, DestinationDraft,
    DestinationFilter, Listing, Page,
};
use crate::domain::foundation::{AccommodationId, DestinationId, DomainError};
use crate::ports::{AccommodationRepository, DestinationRepository};

/// Rows keyed by id plus the next id to hand out.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn page(&self, page: Page, keep: impl Fn(&T) -> bool) -> Listing<T> {
        let matching: Vec<&T> = self.rows.values().filter(|row| keep(row)).collect();
        Listing {
            total: matching.len() as u64,
            items: matching
                .into_iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .cloned()
                .collect(),
        }
    }
}

/// In-memory destination catalog, ordered by id.
pub struct InMemoryDestinationRepository {
    table: RwLock<Table<Destination>>,
}

impl InMemoryDestinationRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryDestinationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationRepository {
    async fn create(&self, draft: &DestinationDraft) -> Result<Destination, DomainError> {
        let mut table = self.table.write().await;
        let id = table.allocate();
        let destination = Destination {
            id: DestinationId::new(id),
            details: draft.clone(),
        };
        table.rows.insert(id, destination.clone());
        Ok(destination)
    }

    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, DomainError> {
        Ok(self.table.read().await.rows.get(&id.as_i64()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Destination>, DomainError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|d| d.details.name.to_lowercase().contains(&needle))
            .cloned())
    }

    async fn list(&self, filter: &DestinationFilter, page: Page) -> Result<Listing<Destination>, DomainError> {
        Ok(self.table.read().await.page(page, |d| filter.matches(d)))
    }

    async fn update(
        &self,
        id: DestinationId,
        draft: &DestinationDraft,
    ) -> Result<Option<Destination>, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id.as_i64()).map(|existing| {
            existing.details = draft.clone();
            existing.clone()
        }))
    }

    async fn delete(&self, id: DestinationId) -> Result<bool, DomainError> {
        Ok(self.table.write().await.rows.remove(&id.as_i64()).is_some())
    }
}

/// In-memory accommodation catalog, ordered by id.
pub struct InMemoryAccommodationRepository {
    table: RwLock<Table<Accommodation>>,
}

impl InMemoryAccommodationRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryAccommodationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccommodationRepository for InMemoryAccommodationRepository {
    async fn create(&self, draft: &AccommodationDraft) -> Result<Accommodation, DomainError> {
        let mut table = self.table.write().await;
        let id = table.allocate();
        let accommodation = Accommodation {
            id: AccommodationId::new(id),
            details: draft.clone(),
        };
        table.rows.insert(id, accommodation.clone());
        Ok(accommodation)
    }

    async fn find_by_id(&self, id: AccommodationId) -> Result<Option<Accommodation>, DomainError> {
        Ok(self.table.read().await.rows.get(&id.as_i64()).cloned())
    }

    async fn list(
        &self,
        filter: &AccommodationFilter,
        page: Page,
    ) -> Result<Listing<Accommodation>, DomainError> {
        Ok(self.table.read().await.page(page, |a| filter.matches(a)))
    }

    async fn update(
        &self,
        id: AccommodationId,
        draft: &AccommodationDraft,
    ) -> Result<Option<Accommodation>, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id.as_i64()).map(|existing| {
            existing.details = draft.clone();
            existing.clone()
        }))
    }

    async fn delete(&self, id: AccommodationId) -> Result<bool, DomainError> {
        Ok(self.table.write().await.rows.remove(&id.as_i64()).is_some())
    }
}
