//! Booking hotel search adapter.
//!
//! `GET {base}/search?api_key=..&location=..&check_in=..&check_out=..`
//! returning `{"hotels": [...]}`.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::travel::{FailureKind, HotelOffer, HotelQuery};

use super::client::ProviderClient;

#[derive(Debug, Deserialize)]
struct HotelsResponse {
    #[serde(alias = "results")]
    hotels: Vec<HotelRecord>,
}

#[derive(Debug, Deserialize)]
struct HotelRecord {
    name: String,
    #[serde(default, alias = "price_per_night")]
    price: Option<f64>,
}

/// Hotel availability search against the Booking API.
#[derive(Debug, Clone)]
pub struct BookingAdapter {
    client: ProviderClient,
    api_key: Option<Secret<String>>,
}

impl BookingAdapter {
    pub fn new(client: ProviderClient, api_key: Option<Secret<String>>) -> Self {
        if api_key.is_none() {
            tracing::warn!("No Booking API key configured; hotel search will be rejected upstream");
        }
        Self { client, api_key }
    }

    pub async fn search(&self, query: &HotelQuery) -> Result<Vec<HotelOffer>, FailureKind> {
        let mut params = Vec::new();
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.expose_secret().clone()));
        }
        params.extend(query.to_params());

        let response: HotelsResponse = self.client.get_json("/search", &params).await?;
        Ok(response
            .hotels
            .into_iter()
            .map(|h| HotelOffer {
                name: h.name,
                price: h.price,
            })
            .collect())
    }
}
