//! Travel catalog: destinations and accommodations managed through the
//! resource API and read by the conversation layer.

mod accommodation;
mod destination;

pub use accommodation::{Accommodation, AccommodationDraft, AccommodationFilter};
pub use destination::{Destination, DestinationDraft, DestinationFilter};

use crate::domain::foundation::ValidationError;

/// Largest page a list request may ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset pagination for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    /// Builds a page, defaulting `limit` to the maximum and capping it there.
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the number of matches overall.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::too_long(field, max));
    }
    Ok(())
}

fn check_optional_len(field: &str, value: &Option<String>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::too_long(field, max)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_max_size() {
        assert_eq!(Page::default(), Page { skip: 0, limit: 100 });
    }

    #[test]
    fn page_caps_limit() {
        assert_eq!(Page::new(Some(20), Some(500)), Page { skip: 20, limit: 100 });
        assert_eq!(Page::new(None, Some(10)).limit, 10);
    }
}
