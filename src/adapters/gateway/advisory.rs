//! Single-destination lookups: emergency contacts, entry requirements and
//! practical tips.

use serde::de::DeserializeOwned;

use crate::domain::travel::{DestinationLookup, FailureKind};

use super::client::ProviderClient;

pub const EMERGENCY_PATH: &str = "/api/travel/emergency";
pub const RESTRICTIONS_PATH: &str = "/api/travel/restrictions";
pub const TIPS_PATH: &str = "/api/travel/tips";

/// `GET {base}{path}?destination=...` decoded into the endpoint's payload.
#[derive(Debug, Clone)]
pub struct AdvisoryAdapter {
    client: ProviderClient,
}

impl AdvisoryAdapter {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub async fn lookup<T: DeserializeOwned>(
        &self,
        path: &'static str,
        lookup: &DestinationLookup,
    ) -> Result<T, FailureKind> {
        self.client.get_json(path, &lookup.to_params()).await
    }
}
