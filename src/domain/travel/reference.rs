//! Static reference data served by the travel-info endpoints.

use super::payload::{EmergencyContacts, PracticalTips, TravelRestrictions};

/// Emergency contacts for the destinations we have verified numbers for.
///
/// Lookup is case-insensitive on the trimmed destination name.
pub fn emergency_contacts_for(destination: &str) -> Option<EmergencyContacts> {
    let key = destination.trim().to_lowercase();
    let (police, embassy, hospitals) = match key.as_str() {
        "paris" => ("112", "N/A (local)", "Hôpital Necker"),
        "new york" => ("911", "+1 212-606-3600", "Mount Sinai"),
        _ => return None,
    };
    Some(EmergencyContacts {
        police: Some(police.to_string()),
        embassy: Some(embassy.to_string()),
        hospitals: Some(hospitals.to_string()),
    })
}

/// Generic practical advice; not yet differentiated per destination.
pub fn practical_tips_for(_destination: &str) -> PracticalTips {
    PracticalTips {
        currency: Some("Euro (EUR)".to_string()),
        plug_adapter: Some("Type C/E".to_string()),
        safety: Some("Watch for pickpockets in crowded areas".to_string()),
    }
}

/// Generic entry requirements; not yet differentiated per destination.
pub fn travel_restrictions_for(_destination: &str) -> TravelRestrictions {
    TravelRestrictions {
        visa: Some("Not required for stays under 90 days".to_string()),
        vaccines: Some("Hepatitis A recommended".to_string()),
        covid: Some("No restrictions".to_string()),
    }
}
