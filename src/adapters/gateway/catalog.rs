//! Destination and accommodation catalog adapter.

use serde::Deserialize;

use crate::domain::travel::{AccommodationQuery, CatalogItem, DestinationQuery, FailureKind};

use super::client::ProviderClient;

/// List envelope returned by the catalog endpoints.
#[derive(Debug, Deserialize)]
struct CatalogPage {
    #[serde(alias = "destinations", alias = "accommodations", alias = "hebergements")]
    items: Vec<CatalogItem>,
}

/// Reads the catalog through the resource API.
#[derive(Debug, Clone)]
pub struct CatalogAdapter {
    client: ProviderClient,
}

impl CatalogAdapter {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub async fn destinations(&self, query: &DestinationQuery) -> Result<Vec<CatalogItem>, FailureKind> {
        let page: CatalogPage = self
            .client
            .get_json("/api/destinations", &query.to_params())
            .await?;
        Ok(page.items)
    }

    pub async fn accommodations(&self, query: &AccommodationQuery) -> Result<Vec<CatalogItem>, FailureKind> {
        let page: CatalogPage = self
            .client
            .get_json("/api/accommodations", &query.to_params())
            .await?;
        Ok(page.items)
    }
}
