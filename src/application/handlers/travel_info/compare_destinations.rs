//! CompareDestinationsHandler - compares two catalog destinations.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::catalog::Destination;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::travel::{ComparisonOutcome, ComparisonRequest};
use crate::ports::DestinationRepository;

#[derive(Debug, Clone, Error)]
pub enum TravelInfoError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Destination not found: {0}")]
    UnknownDestination(String),

    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}

/// Resolves both names in the catalog and summarizes climate and price.
pub struct CompareDestinationsHandler {
    repo: Arc<dyn DestinationRepository>,
}

impl CompareDestinationsHandler {
    pub fn new(repo: Arc<dyn DestinationRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, request: ComparisonRequest) -> Result<ComparisonOutcome, TravelInfoError> {
        let (first, second) = futures::try_join!(
            self.repo.find_by_name(request.destination1()),
            self.repo.find_by_name(request.destination2()),
        )?;

        let first = first.ok_or_else(|| TravelInfoError::UnknownDestination(request.destination1().to_string()))?;
        let second =
            second.ok_or_else(|| TravelInfoError::UnknownDestination(request.destination2().to_string()))?;

        // Distinct names can still match the same row.
        if first.id == second.id {
            return Err(ValidationError::invalid_format(
                "destination2",
                "must name a different destination than destination1",
            )
            .into());
        }

        Ok(ComparisonOutcome {
            summary: Some(summary(&first, &second)),
            ..Default::default()
        })
    }
}

fn summary(first: &Destination, second: &Destination) -> String {
    let (a, b) = (&first.details, &second.details);
    format!(
        "Comparison {} vs {}:\n- Climate: {} vs {}\n- Price: {} vs {}",
        a.name,
        b.name,
        a.climate.as_deref().unwrap_or("unknown"),
        b.climate.as_deref().unwrap_or("unknown"),
        a.price_range.as_deref().unwrap_or("unknown"),
        b.price_range.as_deref().unwrap_or("unknown"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDestinationRepository;
    use crate::domain::catalog::DestinationDraft;

    async fn seeded() -> Arc<InMemoryDestinationRepository> {
        let repo = Arc::new(InMemoryDestinationRepository::new());
        for (name, climate, price) in [("Provence", "Sunny", "$$"), ("Brittany", "Oceanic", "$")] {
            repo.create(&DestinationDraft {
                name: name.to_string(),
                climate: Some(climate.to_string()),
                price_range: Some(price.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn summary_compares_climate_and_price() {
        let handler = CompareDestinationsHandler::new(seeded().await);
        let request = ComparisonRequest::try_new(Some("provence"), Some("Britt")).unwrap();
        let outcome = handler.handle(request).await.unwrap();
        assert_eq!(
            outcome.summary.as_deref(),
            Some("Comparison Provence vs Brittany:\n- Climate: Sunny vs Oceanic\n- Price: $$ vs $")
        );
    }

    #[tokio::test]
    async fn unknown_destination_is_reported_by_name() {
        let handler = CompareDestinationsHandler::new(seeded().await);
        let request = ComparisonRequest::try_new(Some("Provence"), Some("Atlantis")).unwrap();
        match handler.handle(request).await {
            Err(TravelInfoError::UnknownDestination(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn names_resolving_to_the_same_destination_are_rejected() {
        let handler = CompareDestinationsHandler::new(seeded().await);
        let request = ComparisonRequest::try_new(Some("Provence"), Some("prov")).unwrap();
        match handler.handle(request).await {
            Err(TravelInfoError::Validation(e)) => assert_eq!(e.field(), "destination2"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
