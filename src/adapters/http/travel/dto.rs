//! DTOs for travel info endpoints.

use serde::Deserialize;

/// Body of POST /api/travel/compare. Both fields are checked by
/// `ComparisonRequest::try_new`, so missing values reach the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    pub destination1: Option<String>,
    pub destination2: Option<String>,
}

/// `?destination=` shared by the reference-data endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationParam {
    pub destination: Option<String>,
}

impl DestinationParam {
    /// The trimmed destination, if one was given.
    pub fn value(&self) -> Option<&str> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
