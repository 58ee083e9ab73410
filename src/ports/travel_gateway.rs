//! Travel gateway port - one method per downstream travel-data capability.
//!
//! Every method performs at most the outbound calls its adapter is
//! configured for and folds all failures into a `FailureKind`. Nothing is
//! raised past this boundary.

use async_trait::async_trait;

use crate::domain::travel::{
    AccommodationQuery, CatalogItem, ComparisonOutcome, ComparisonRequest, DestinationLookup,
    DestinationQuery, EmergencyContacts, FailureKind, FlightOffer, FlightQuery, HotelOffer,
    HotelQuery, PracticalTips, TravelRestrictions,
};

/// Result of one gateway call.
pub type GatewayResult<T> = Result<T, FailureKind>;

/// Access to external travel data.
#[async_trait]
pub trait TravelGateway: Send + Sync {
    /// Destination catalog search.
    async fn suggest_destinations(&self, query: &DestinationQuery) -> GatewayResult<Vec<CatalogItem>>;

    /// Accommodation catalog search.
    async fn search_accommodations(&self, query: &AccommodationQuery) -> GatewayResult<Vec<CatalogItem>>;

    /// Side-by-side comparison of two destinations.
    async fn compare_destinations(&self, request: &ComparisonRequest) -> GatewayResult<ComparisonOutcome>;

    /// Emergency contacts for a destination.
    async fn emergency_contacts(&self, lookup: &DestinationLookup) -> GatewayResult<EmergencyContacts>;

    /// Visa, vaccine and health entry requirements.
    async fn travel_restrictions(&self, lookup: &DestinationLookup) -> GatewayResult<TravelRestrictions>;

    /// Currency, plug and safety advice.
    async fn practical_tips(&self, lookup: &DestinationLookup) -> GatewayResult<PracticalTips>;

    /// Flight search with the provider's retry policy.
    async fn search_flights(&self, query: &FlightQuery) -> GatewayResult<Vec<FlightOffer>>;

    /// Hotel availability search.
    async fn search_hotels(&self, query: &HotelQuery) -> GatewayResult<Vec<HotelOffer>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_gateway_is_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TravelGateway>();
    }
}
