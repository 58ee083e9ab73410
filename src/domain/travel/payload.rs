//! Success payloads returned by the travel gateway.
//!
//! Field aliases accept the alternative key names some providers use
//! (`phone`, `hospital`, French keys), so decoding is lenient about naming
//! but strict about shape.

use serde::{Deserialize, Serialize};

/// One catalog entry as seen by the conversation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(alias = "nom")]
    pub name: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of comparing two destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    #[serde(default, alias = "message")]
    pub summary: Option<String>,
    #[serde(default, alias = "plage")]
    pub beach: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
}

/// Emergency phone numbers and addresses for one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContacts {
    #[serde(default, alias = "phone")]
    pub police: Option<String>,
    #[serde(default)]
    pub embassy: Option<String>,
    #[serde(default, alias = "hospital", alias = "hopitaux")]
    pub hospitals: Option<String>,
}

/// Entry requirements for one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRestrictions {
    #[serde(default)]
    pub visa: Option<String>,
    #[serde(default, alias = "vaccins")]
    pub vaccines: Option<String>,
    #[serde(default)]
    pub covid: Option<String>,
}

/// Day-to-day advice for one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticalTips {
    #[serde(default, alias = "devise")]
    pub currency: Option<String>,
    #[serde(default, alias = "adaptateur")]
    pub plug_adapter: Option<String>,
    #[serde(default, alias = "securite")]
    pub safety: Option<String>,
}

/// One flight returned by the flight search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightOffer {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
}

/// One hotel returned by the hotel search provider.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelOffer {
    pub name: String,
    pub price: Option<f64>,
}
