//! DTOs for destination endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Destination, DestinationDraft, DestinationFilter, Listing, Page};

/// Body of POST and PUT requests.
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<DestinationRequest> for DestinationDraft {
    fn from(req: DestinationRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price_range: req.price_range,
            country: req.country,
            climate: req.climate,
            activities: req.activities,
            image_url: req.image_url,
        }
    }
}

/// Query parameters of GET /api/destinations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDestinationsQuery {
    pub name: Option<String>,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListDestinationsQuery {
    pub fn into_parts(self) -> (DestinationFilter, Page) {
        (
            DestinationFilter {
                name: self.name,
                country: self.country,
                theme: self.theme,
            },
            Page::new(self.skip, self.limit),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_range: Option<String>,
    pub country: Option<String>,
    pub climate: Option<String>,
    pub activities: Option<String>,
    pub image_url: Option<String>,
}

impl From<Destination> for DestinationResponse {
    fn from(d: Destination) -> Self {
        let details = d.details;
        Self {
            id: d.id.as_i64(),
            name: details.name,
            description: details.description,
            price_range: details.price_range,
            country: details.country,
            climate: details.climate,
            activities: details.activities,
            image_url: details.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationListResponse {
    pub items: Vec<DestinationResponse>,
    pub total: u64,
}

impl From<Listing<Destination>> for DestinationListResponse {
    fn from(listing: Listing<Destination>) -> Self {
        Self {
            items: listing.items.into_iter().map(Into::into).collect(),
            total: listing.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_needs_only_a_name() {
        let req: DestinationRequest = serde_json::from_str(r#"{"name":"Lisbon"}"#).unwrap();
        let draft = DestinationDraft::from(req);
        assert_eq!(draft.name, "Lisbon");
        assert!(draft.country.is_none());
    }

    #[test]
    fn query_limit_is_capped() {
        let query = ListDestinationsQuery {
            limit: Some(500),
            ..Default::default()
        };
        let (_, page) = query.into_parts();
        assert_eq!(page.limit, 100);
    }
}
