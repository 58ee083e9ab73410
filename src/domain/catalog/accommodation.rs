//! Accommodation records of the travel catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccommodationId, ValidationError};

use super::destination::{contains, equals};
use super::{check_len, check_optional_len, normalized};

/// A stored accommodation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: AccommodationId,
    #[serde(flatten)]
    pub details: AccommodationDraft,
}

/// Writable fields of an accommodation, used for both create and replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationDraft {
    pub name: String,
    /// hotel, hostel, rental and so on.
    #[serde(default)]
    pub accommodation_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub price_per_night: Option<f64>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AccommodationDraft {
    pub fn validated(self) -> Result<Self, ValidationError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            accommodation_type: normalized(self.accommodation_type),
            address: normalized(self.address),
            city: normalized(self.city),
            country: normalized(self.country),
            price_per_night: self.price_per_night,
            capacity: self.capacity,
            amenities: normalized(self.amenities),
            average_rating: self.average_rating,
            image_url: normalized(self.image_url),
        };

        check_len("name", &draft.name, 100)?;
        check_optional_len("accommodation_type", &draft.accommodation_type, 50)?;
        check_optional_len("address", &draft.address, 200)?;
        check_optional_len("city", &draft.city, 100)?;
        check_optional_len("country", &draft.country, 100)?;
        check_optional_len("image_url", &draft.image_url, 300)?;

        if let Some(price) = draft.price_per_night {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::out_of_range("price_per_night", 0, "infinity"));
            }
        }
        if let Some(capacity) = draft.capacity {
            if capacity < 1 {
                return Err(ValidationError::out_of_range("capacity", 1, i32::MAX));
            }
        }
        if let Some(rating) = draft.average_rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ValidationError::out_of_range("average_rating", 0, 5));
            }
        }
        Ok(draft)
    }
}

/// List filters for accommodations. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccommodationFilter {
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    /// Case-insensitive equality on the type.
    pub accommodation_type: Option<String>,
    /// Upper bound on the nightly price.
    pub max_price: Option<f64>,
    /// Lower bound on the capacity.
    pub min_capacity: Option<i32>,
}

impl AccommodationFilter {
    pub fn matches(&self, accommodation: &Accommodation) -> bool {
        let a = &accommodation.details;
        let price_ok = match self.max_price {
            None => true,
            Some(max) => a.price_per_night.is_some_and(|p| p <= max),
        };
        let capacity_ok = match self.min_capacity {
            None => true,
            Some(min) => a.capacity.is_some_and(|c| c >= min),
        };
        contains(a.city.as_ref(), &self.city)
            && equals(&a.accommodation_type, &self.accommodation_type)
            && price_ok
            && capacity_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(city: &str, price: f64, capacity: i32) -> Accommodation {
        Accommodation {
            id: AccommodationId::new(7),
            details: AccommodationDraft {
                name: format!("Hotel {}", city),
                accommodation_type: Some("hotel".to_string()),
                city: Some(city.to_string()),
                price_per_night: Some(price),
                capacity: Some(capacity),
                ..Default::default()
            },
        }
    }

    #[test]
    fn validated_rejects_negative_price() {
        let err = AccommodationDraft {
            name: "Cheap".to_string(),
            price_per_night: Some(-1.0),
            ..Default::default()
        }
        .validated()
        .unwrap_err();
        assert_eq!(err.field(), "price_per_night");
    }

    #[test]
    fn validated_rejects_zero_capacity_and_bad_rating() {
        let base = AccommodationDraft {
            name: "Inn".to_string(),
            ..Default::default()
        };
        let err = AccommodationDraft { capacity: Some(0), ..base.clone() }
            .validated()
            .unwrap_err();
        assert_eq!(err.field(), "capacity");

        let err = AccommodationDraft { average_rating: Some(5.5), ..base }
            .validated()
            .unwrap_err();
        assert_eq!(err.field(), "average_rating");
    }

    #[test]
    fn filter_combines_city_price_and_capacity() {
        let filter = AccommodationFilter {
            city: Some("lis".to_string()),
            max_price: Some(100.0),
            min_capacity: Some(2),
            ..Default::default()
        };
        assert!(filter.matches(&hotel("Lisbon", 80.0, 4)));
        assert!(!filter.matches(&hotel("Lisbon", 120.0, 4)));
        assert!(!filter.matches(&hotel("Lisbon", 80.0, 1)));
        assert!(!filter.matches(&hotel("Porto", 80.0, 4)));
    }

    #[test]
    fn filter_type_is_exact() {
        let filter = AccommodationFilter {
            accommodation_type: Some("Hostel".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&hotel("Lisbon", 80.0, 4)));
    }
}
