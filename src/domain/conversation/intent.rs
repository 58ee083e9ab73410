//! Intent table: maps NLU action names to handler kinds.
//!
//! The table is built once and never mutated afterwards. Each entry carries
//! the slots that must be set before the handler may call the gateway.

use std::collections::HashMap;
use std::fmt;

use super::slots::{names, SlotSnapshot};

/// Every handler the dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    SuggestDestinations,
    SearchAccommodation,
    CompareDestinations,
    EmergencyInfo,
    TravelRestrictions,
    PracticalTips,
    ValidateBudget,
    SearchFlights,
    SearchHotels,
    Fallback,
}

impl IntentKind {
    pub const ALL: [IntentKind; 10] = [
        IntentKind::SuggestDestinations,
        IntentKind::SearchAccommodation,
        IntentKind::CompareDestinations,
        IntentKind::EmergencyInfo,
        IntentKind::TravelRestrictions,
        IntentKind::PracticalTips,
        IntentKind::ValidateBudget,
        IntentKind::SearchFlights,
        IntentKind::SearchHotels,
        IntentKind::Fallback,
    ];

    /// The NLU action name that selects this handler.
    pub fn action_name(&self) -> &'static str {
        match self {
            IntentKind::SuggestDestinations => "action_suggest_destinations",
            IntentKind::SearchAccommodation => "action_search_accommodation",
            IntentKind::CompareDestinations => "action_compare_destinations",
            IntentKind::EmergencyInfo => "action_emergency_info",
            IntentKind::TravelRestrictions => "action_check_restrictions",
            IntentKind::PracticalTips => "action_practical_tips",
            IntentKind::ValidateBudget => "action_validate_budget",
            IntentKind::SearchFlights => "action_search_flights",
            IntentKind::SearchHotels => "action_search_hotels",
            IntentKind::Fallback => "action_fallback",
        }
    }

    /// Slots that must be set before any gateway call.
    ///
    /// Comparison targets are checked by `ComparisonRequest` instead, so the
    /// two-destination rule lives in one place.
    pub fn required_slots(&self) -> &'static [&'static str] {
        match self {
            IntentKind::SuggestDestinations
            | IntentKind::CompareDestinations
            | IntentKind::Fallback => &[],
            IntentKind::SearchAccommodation
            | IntentKind::EmergencyInfo
            | IntentKind::TravelRestrictions
            | IntentKind::PracticalTips => &[names::DESTINATION],
            IntentKind::ValidateBudget => &[names::BUDGET],
            IntentKind::SearchFlights => &[names::ORIGIN, names::DESTINATION, names::DATE],
            IntentKind::SearchHotels => &[names::DESTINATION, names::DATE],
        }
    }

    /// First required slot that is absent or blank, if any.
    /// Handlers that forward `party_size` to a provider.
    pub fn uses_party_size(&self) -> bool {
        matches!(self, IntentKind::SearchAccommodation | IntentKind::SearchFlights)
    }

    pub fn missing_slot(&self, slots: &SlotSnapshot) -> Option<&'static str> {
        self.required_slots()
            .iter()
            .copied()
            .find(|slot| !slots.is_set(slot))
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action_name())
    }
}

/// Immutable lookup from action name to handler kind.
#[derive(Debug, Clone)]
pub struct IntentTable {
    by_name: HashMap<&'static str, IntentKind>,
}

impl IntentTable {
    /// The table of every handler this service ships.
    pub fn standard() -> Self {
        let by_name = IntentKind::ALL
            .iter()
            .map(|kind| (kind.action_name(), *kind))
            .collect();
        Self { by_name }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, action_name: &str) -> Option<IntentKind> {
        self.by_name.get(action_name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_resolves_every_kind_by_its_action_name() {
        let table = IntentTable::standard();
        assert_eq!(table.len(), IntentKind::ALL.len());
        for kind in IntentKind::ALL {
            assert_eq!(table.lookup(kind.action_name()), Some(kind));
        }
    }

    #[test]
    fn lookup_is_exact() {
        let table = IntentTable::standard();
        assert_eq!(table.lookup("ACTION_FALLBACK"), None);
        assert_eq!(table.lookup("action_fallback "), None);
        assert_eq!(table.lookup("action_rechercher_vols"), None);
    }

    #[test]
    fn missing_slot_reports_first_unset_requirement() {
        let slots = SlotSnapshot::new()
            .with(names::ORIGIN, "CDG")
            .with(names::DESTINATION, "");
        assert_eq!(
            IntentKind::SearchFlights.missing_slot(&slots),
            Some(names::DESTINATION)
        );
    }

    #[test]
    fn kinds_without_requirements_never_miss_slots() {
        let empty = SlotSnapshot::new();
        assert_eq!(IntentKind::SuggestDestinations.missing_slot(&empty), None);
        assert_eq!(IntentKind::Fallback.missing_slot(&empty), None);
    }
}
