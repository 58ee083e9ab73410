//! AviationStack flight search adapter.
//!
//! `GET {base}/flights?access_key=..&dep_iata=..&arr_iata=..&flight_date=..`
//! returning `{"data": [...]}`. Retry-eligible: the client's attempt budget
//! applies.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::travel::{FailureKind, FlightOffer, FlightQuery};

use super::client::ProviderClient;

#[derive(Debug, Deserialize)]
struct FlightsResponse {
    data: Vec<FlightRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct FlightRecord {
    #[serde(default)]
    airline: Option<Named>,
    #[serde(default)]
    flight: Option<FlightNumber>,
    #[serde(default)]
    departure: Option<Schedule>,
    #[serde(default)]
    arrival: Option<Schedule>,
}

#[derive(Debug, Default, Deserialize)]
struct Named {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FlightNumber {
    iata: Option<String>,
    number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Schedule {
    scheduled: Option<String>,
}

impl From<FlightRecord> for FlightOffer {
    fn from(record: FlightRecord) -> Self {
        FlightOffer {
            airline: record.airline.and_then(|a| a.name),
            flight_number: record.flight.and_then(|f| f.iata.or(f.number)),
            departure: record.departure.and_then(|d| d.scheduled),
            arrival: record.arrival.and_then(|a| a.scheduled),
        }
    }
}

/// Flight search against AviationStack.
#[derive(Debug, Clone)]
pub struct AviationStackAdapter {
    client: ProviderClient,
    access_key: Option<Secret<String>>,
}

impl AviationStackAdapter {
    pub fn new(client: ProviderClient, access_key: Option<Secret<String>>) -> Self {
        if access_key.is_none() {
            tracing::warn!("No AviationStack access key configured; flight search will be rejected upstream");
        }
        Self { client, access_key }
    }

    fn params(&self, query: &FlightQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(key) = &self.access_key {
            params.push(("access_key", key.expose_secret().clone()));
        }
        params.extend(query.to_params());
        params
    }

    pub async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, FailureKind> {
        let response: FlightsResponse = self.client.get_json("/flights", &self.params(query)).await?;
        Ok(response.data.into_iter().map(FlightOffer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_record_maps_nested_fields() {
        let response: FlightsResponse = serde_json::from_str(
            r#"{"data":[{"airline":{"name":"Air France"},"flight":{"number":"6","iata":"AF6"},
                "departure":{"airport":"CDG","scheduled":"2025-07-01T10:00:00+00:00"},
                "arrival":{"scheduled":null}}]}"#,
        )
        .unwrap();
        let offers: Vec<FlightOffer> = response.data.into_iter().map(FlightOffer::from).collect();
        assert_eq!(offers[0].airline.as_deref(), Some("Air France"));
        assert_eq!(offers[0].flight_number.as_deref(), Some("AF6"));
        assert_eq!(offers[0].departure.as_deref(), Some("2025-07-01T10:00:00+00:00"));
        assert_eq!(offers[0].arrival, None);
    }

    #[test]
    fn missing_data_array_is_invalid() {
        assert!(serde_json::from_str::<FlightsResponse>(r#"{"error":{"code":"x"}}"#).is_err());
    }
}
