//! HTTP implementation of the `TravelGateway` port.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{AdapterKind, GatewayConfig};
use crate::domain::travel::{
    AccommodationQuery, CatalogItem, ComparisonOutcome, ComparisonRequest, DestinationLookup,
    DestinationQuery, EmergencyContacts, FlightOffer, FlightQuery, HotelOffer, HotelQuery,
    PracticalTips, TravelRestrictions,
};
use crate::ports::{GatewayResult, TravelGateway};

use super::advisory::{AdvisoryAdapter, EMERGENCY_PATH, RESTRICTIONS_PATH, TIPS_PATH};
use super::aviation_stack::AviationStackAdapter;
use super::booking::BookingAdapter;
use super::catalog::CatalogAdapter;
use super::client::ProviderClient;
use super::comparison::ComparisonAdapter;

/// Gateway composed of one adapter per capability, all sharing one
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpTravelGateway {
    catalog: CatalogAdapter,
    comparison: ComparisonAdapter,
    emergency: AdvisoryAdapter,
    advisory: AdvisoryAdapter,
    flights: AviationStackAdapter,
    hotels: BookingAdapter,
}

impl HttpTravelGateway {
    /// Builds every adapter from configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent("travel-assistant").build()?;
        let client = |kind: AdapterKind| ProviderClient::new(kind.name(), http.clone(), &config.settings(kind));

        let gateway = Self {
            catalog: CatalogAdapter::new(client(AdapterKind::Catalog)),
            comparison: ComparisonAdapter::new(client(AdapterKind::Comparison)),
            emergency: AdvisoryAdapter::new(client(AdapterKind::Emergency)),
            advisory: AdvisoryAdapter::new(client(AdapterKind::Advisory)),
            flights: AviationStackAdapter::new(
                client(AdapterKind::Flights),
                config.settings(AdapterKind::Flights).api_key,
            ),
            hotels: BookingAdapter::new(
                client(AdapterKind::Hotels),
                config.settings(AdapterKind::Hotels).api_key,
            ),
        };

        tracing::info!(backend_url = %config.backend_url, "Travel gateway configured");
        Ok(gateway)
    }
}

#[async_trait]
impl TravelGateway for HttpTravelGateway {
    async fn suggest_destinations(&self, query: &DestinationQuery) -> GatewayResult<Vec<CatalogItem>> {
        self.catalog.destinations(query).await
    }

    async fn search_accommodations(&self, query: &AccommodationQuery) -> GatewayResult<Vec<CatalogItem>> {
        self.catalog.accommodations(query).await
    }

    async fn compare_destinations(&self, request: &ComparisonRequest) -> GatewayResult<ComparisonOutcome> {
        self.comparison.compare(request).await
    }

    async fn emergency_contacts(&self, lookup: &DestinationLookup) -> GatewayResult<EmergencyContacts> {
        self.emergency.lookup(EMERGENCY_PATH, lookup).await
    }

    async fn travel_restrictions(&self, lookup: &DestinationLookup) -> GatewayResult<TravelRestrictions> {
        self.advisory.lookup(RESTRICTIONS_PATH, lookup).await
    }

    async fn practical_tips(&self, lookup: &DestinationLookup) -> GatewayResult<PracticalTips> {
        self.advisory.lookup(TIPS_PATH, lookup).await
    }

    async fn search_flights(&self, query: &FlightQuery) -> GatewayResult<Vec<FlightOffer>> {
        self.flights.search(query).await
    }

    async fn search_hotels(&self, query: &HotelQuery) -> GatewayResult<Vec<HotelOffer>> {
        self.hotels.search(query).await
    }
}
