//! Outbound request shapes for each gateway capability.
//!
//! Every query knows how to turn itself into the parameter list of its
//! outbound call. Absent and blank values are dropped from that list, so an
//! unset slot never reaches a provider as a filter.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Ordered parameter list of one outbound call.
pub type Params = Vec<(&'static str, String)>;

fn push_present(params: &mut Params, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        let v = v.trim();
        if !v.is_empty() {
            params.push((key, v.to_string()));
        }
    }
}

/// Filters for the destination catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationQuery {
    pub theme: Option<String>,
    pub budget: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
}

impl DestinationQuery {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_present(&mut params, "theme", &self.theme);
        push_present(&mut params, "budget", &self.budget);
        push_present(&mut params, "date", &self.date);
        push_present(&mut params, "duration", &self.duration);
        params
    }
}

/// Filters for the accommodation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationQuery {
    pub city: String,
    pub party_size: Option<u32>,
}

impl AccommodationQuery {
    pub fn to_params(&self) -> Params {
        let mut params = vec![("city", self.city.clone())];
        if let Some(size) = self.party_size {
            params.push(("min_capacity", size.to_string()));
        }
        params
    }
}

/// A request to compare exactly two distinct destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRequest {
    destination1: String,
    destination2: String,
}

impl ComparisonRequest {
    /// Builds a comparison request, rejecting missing or identical targets.
    pub fn try_new(
        destination1: Option<&str>,
        destination2: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let first = non_blank(destination1).ok_or_else(|| ValidationError::empty_field("destination1"))?;
        let second = non_blank(destination2).ok_or_else(|| ValidationError::empty_field("destination2"))?;

        if first.eq_ignore_ascii_case(second) {
            return Err(ValidationError::invalid_format(
                "destination2",
                "must differ from destination1",
            ));
        }

        Ok(Self {
            destination1: first.to_string(),
            destination2: second.to_string(),
        })
    }

    pub fn destination1(&self) -> &str {
        &self.destination1
    }

    pub fn destination2(&self) -> &str {
        &self.destination2
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Lookup keyed by a single destination (emergency info, advisories, tips).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLookup {
    pub destination: String,
}

impl DestinationLookup {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn to_params(&self) -> Params {
        vec![("destination", self.destination.clone())]
    }
}

/// Flight search criteria. Airports are IATA codes or city names as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub return_date: Option<String>,
    pub adults: Option<u32>,
}

impl FlightQuery {
    /// Provider parameters, without the access key.
    pub fn to_params(&self) -> Params {
        let mut params = vec![
            ("dep_iata", self.origin.clone()),
            ("arr_iata", self.destination.clone()),
            ("flight_date", self.date.clone()),
        ];
        push_present(&mut params, "return_date", &self.return_date);
        if let Some(adults) = self.adults {
            params.push(("adults", adults.to_string()));
        }
        params
    }
}

/// Hotel search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelQuery {
    pub location: String,
    pub check_in: String,
    pub check_out: Option<String>,
}

impl HotelQuery {
    /// Provider parameters, without the API key.
    pub fn to_params(&self) -> Params {
        let mut params = vec![
            ("location", self.location.clone()),
            ("check_in", self.check_in.clone()),
        ];
        push_present(&mut params, "check_out", &self.check_out);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &Params) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn destination_query_drops_absent_and_blank_filters() {
        let query = DestinationQuery {
            theme: Some("beach".to_string()),
            budget: None,
            date: Some("   ".to_string()),
            duration: Some("7".to_string()),
        };
        assert_eq!(
            query.to_params(),
            vec![("theme", "beach".to_string()), ("duration", "7".to_string())]
        );
    }

    #[test]
    fn empty_destination_query_has_no_params() {
        assert!(DestinationQuery::default().to_params().is_empty());
    }

    #[test]
    fn accommodation_query_maps_party_size_to_min_capacity() {
        let query = AccommodationQuery {
            city: "Lisbon".to_string(),
            party_size: Some(4),
        };
        assert_eq!(
            query.to_params(),
            vec![("city", "Lisbon".to_string()), ("min_capacity", "4".to_string())]
        );

        let query = AccommodationQuery {
            city: "Lisbon".to_string(),
            party_size: None,
        };
        assert_eq!(keys(&query.to_params()), vec!["city"]);
    }

    #[test]
    fn comparison_requires_both_destinations() {
        let err = ComparisonRequest::try_new(Some("Paris"), None).unwrap_err();
        assert_eq!(err.field(), "destination2");

        let err = ComparisonRequest::try_new(None, Some("Rome")).unwrap_err();
        assert_eq!(err.field(), "destination1");

        assert!(ComparisonRequest::try_new(Some("Paris"), Some("  ")).is_err());
    }

    #[test]
    fn comparison_rejects_same_destination_twice() {
        assert!(ComparisonRequest::try_new(Some("Paris"), Some("paris")).is_err());
    }

    #[test]
    fn comparison_serializes_both_names() {
        let request = ComparisonRequest::try_new(Some(" Paris "), Some("Rome")).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["destination1"], "Paris");
        assert_eq!(json["destination2"], "Rome");
    }

    #[test]
    fn flight_query_omits_optional_params_when_absent() {
        let query = FlightQuery {
            origin: "CDG".to_string(),
            destination: "JFK".to_string(),
            date: "2025-07-01".to_string(),
            return_date: None,
            adults: None,
        };
        assert_eq!(keys(&query.to_params()), vec!["dep_iata", "arr_iata", "flight_date"]);
    }

    #[test]
    fn hotel_query_includes_check_out_when_present() {
        let query = HotelQuery {
            location: "Rome".to_string(),
            check_in: "2025-07-01".to_string(),
            check_out: Some("2025-07-05".to_string()),
        };
        assert_eq!(keys(&query.to_params()), vec!["location", "check_in", "check_out"]);
    }
}
