//! Destination comparison adapter.

use crate::domain::travel::{ComparisonOutcome, ComparisonRequest, FailureKind};

use super::client::ProviderClient;

/// Posts a validated pair of destinations to the comparison endpoint.
#[derive(Debug, Clone)]
pub struct ComparisonAdapter {
    client: ProviderClient,
}

impl ComparisonAdapter {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonOutcome, FailureKind> {
        self.client.post_json("/api/travel/compare", request).await
    }
}
