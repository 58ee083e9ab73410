//! DTOs for accommodation endpoints.
//!
//! Request bodies deserialize straight into `AccommodationDraft` and single
//! records serialize as the flattened `Accommodation`; only the list
//! envelope and the query string need their own shapes.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Accommodation, AccommodationFilter, Listing, Page};

/// Query parameters of GET /api/accommodations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAccommodationsQuery {
    pub city: Option<String>,
    pub accommodation_type: Option<String>,
    pub max_price: Option<f64>,
    pub min_capacity: Option<i32>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListAccommodationsQuery {
    pub fn into_parts(self) -> (AccommodationFilter, Page) {
        (
            AccommodationFilter {
                city: self.city,
                accommodation_type: self.accommodation_type,
                max_price: self.max_price,
                min_capacity: self.min_capacity,
            },
            Page::new(self.skip, self.limit),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationListResponse {
    pub items: Vec<Accommodation>,
    pub total: u64,
}

impl From<Listing<Accommodation>> for AccommodationListResponse {
    fn from(listing: Listing<Accommodation>) -> Self {
        Self {
            items: listing.items,
            total: listing.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AccommodationDraft;
    use crate::domain::foundation::AccommodationId;

    #[test]
    fn list_items_serialize_flat() {
        let response = AccommodationListResponse {
            items: vec![Accommodation {
                id: AccommodationId::new(4),
                details: AccommodationDraft {
                    name: "Hostel One".to_string(),
                    city: Some("Lisbon".to_string()),
                    ..Default::default()
                },
            }],
            total: 1,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["name"], "Hostel One");
        assert_eq!(json["items"][0]["city"], "Lisbon");
        assert_eq!(json["total"], 1);
    }
}
