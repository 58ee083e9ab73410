//! Destination records of the travel catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DestinationId, ValidationError};

use super::{check_len, check_optional_len, normalized};

/// A stored destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    #[serde(flatten)]
    pub details: DestinationDraft,
}

/// Writable fields of a destination, used for both create and replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl DestinationDraft {
    /// Trims every field, turns blank optionals into `None` and checks the
    /// column limits.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            description: normalized(self.description),
            price_range: normalized(self.price_range),
            country: normalized(self.country),
            climate: normalized(self.climate),
            activities: normalized(self.activities),
            image_url: normalized(self.image_url),
        };

        check_len("name", &draft.name, 100)?;
        check_optional_len("price_range", &draft.price_range, 50)?;
        check_optional_len("country", &draft.country, 100)?;
        check_optional_len("climate", &draft.climate, 50)?;
        check_optional_len("activities", &draft.activities, 200)?;
        check_optional_len("image_url", &draft.image_url, 300)?;
        Ok(draft)
    }
}

/// List filters for destinations. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive equality on the country.
    pub country: Option<String>,
    /// Case-insensitive substring of the activities or the climate.
    pub theme: Option<String>,
}

impl DestinationFilter {
    pub fn matches(&self, destination: &Destination) -> bool {
        let d = &destination.details;
        contains(Some(&d.name), &self.name)
            && equals(&d.country, &self.country)
            && (contains(d.activities.as_ref(), &self.theme) || contains(d.climate.as_ref(), &self.theme))
    }
}

pub(super) fn contains(field: Option<&String>, needle: &Option<String>) -> bool {
    match needle.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        None => true,
        Some(n) => field.is_some_and(|f| f.to_lowercase().contains(&n.to_lowercase())),
    }
}

pub(super) fn equals(field: &Option<String>, expected: &Option<String>) -> bool {
    match expected.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        None => true,
        Some(e) => field.as_deref().is_some_and(|f| f.eq_ignore_ascii_case(e)),
    }
}
