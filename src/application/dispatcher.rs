//! Action dispatcher: intent name + slot snapshot in, reply out.
//!
//! `dispatch` is total. Unknown intents get the rephrase reply, missing
//! slots a clarification with no gateway call, and gateway failures the
//! renderer's per-intent fallback.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::conversation::budget::is_valid_budget;
use crate::domain::conversation::renderer::{self, Payload, RenderContext};
use crate::domain::conversation::slots::names;
use crate::domain::conversation::{IntentKind, IntentTable, Reply, SlotMutation, SlotSnapshot, SlotValue};
use crate::domain::travel::{
    AccommodationQuery, ComparisonRequest, DestinationLookup, DestinationQuery, FailureKind,
    FlightQuery, HotelQuery,
};
use crate::ports::TravelGateway;

/// Routes each turn to its handler.
#[derive(Clone)]
pub struct Dispatcher {
    table: Arc<IntentTable>,
    gateway: Arc<dyn TravelGateway>,
}

impl Dispatcher {
    pub fn new(table: Arc<IntentTable>, gateway: Arc<dyn TravelGateway>) -> Self {
        Self { table, gateway }
    }

    /// Produces the reply for one turn.
    pub async fn dispatch(&self, intent: &str, slots: &SlotSnapshot) -> Reply {
        let Some(kind) = self.table.lookup(intent) else {
            tracing::info!(intent, "Unknown intent, asking to rephrase");
            return renderer::rephrase();
        };

        if let Some(missing) = kind.missing_slot(slots) {
            tracing::debug!(intent, missing, "Required slot unset");
            return renderer::clarification(kind, missing);
        }

        let party_size = match slots.count(names::PARTY_SIZE) {
            Ok(size) => size,
            Err(e) if kind.uses_party_size() => {
                tracing::debug!(intent, error = %e, "Party size is not a whole number");
                return renderer::clarification(kind, names::PARTY_SIZE);
            }
            Err(_) => None,
        };

        let ctx = RenderContext::from_slots(slots);
        match kind {
            IntentKind::Fallback => renderer::rephrase(),
            IntentKind::ValidateBudget => validate_budget(slots),
            IntentKind::CompareDestinations => {
                let request = match ComparisonRequest::try_new(
                    slots.text(names::DESTINATION1).as_deref(),
                    slots.text(names::DESTINATION2).as_deref(),
                ) {
                    Ok(request) => request,
                    Err(e) => {
                        tracing::debug!(intent, field = e.field(), "Invalid comparison request");
                        return renderer::clarification(kind, e.field());
                    }
                };
                let result = self
                    .gateway
                    .compare_destinations(&request)
                    .await
                    .map(Payload::Comparison);
                renderer::render(kind, &result, &ctx)
            }
            IntentKind::SearchAccommodation => {
                let query = AccommodationQuery {
                    city: required(slots, names::DESTINATION),
                    party_size,
                };
                let result = self
                    .gateway
                    .search_accommodations(&query)
                    .await
                    .map(Payload::Accommodations);
                renderer::render(kind, &result, &ctx).with_mutation(SlotMutation::set(
                    names::LAST_SEARCH,
                    SlotValue::text(Utc::now().to_rfc3339()),
                ))
            }
            _ => {
                let result = self.fetch(kind, slots, party_size).await;
                renderer::render(kind, &result, &ctx)
            }
        }
    }

    /// Single-call handlers whose request is a pure function of the slots.
    async fn fetch(
        &self,
        kind: IntentKind,
        slots: &SlotSnapshot,
        party_size: Option<u32>,
    ) -> Result<Payload, FailureKind> {
        let lookup = || DestinationLookup::new(required(slots, names::DESTINATION));
        match kind {
            IntentKind::SuggestDestinations => {
                let query = DestinationQuery {
                    theme: slots.text(names::THEME),
                    budget: slots.text(names::BUDGET),
                    date: slots.text(names::DATE),
                    duration: slots.text(names::DURATION),
                };
                self.gateway
                    .suggest_destinations(&query)
                    .await
                    .map(Payload::Destinations)
            }
            IntentKind::EmergencyInfo => self
                .gateway
                .emergency_contacts(&lookup())
                .await
                .map(Payload::Emergency),
            IntentKind::TravelRestrictions => self
                .gateway
                .travel_restrictions(&lookup())
                .await
                .map(Payload::Restrictions),
            IntentKind::PracticalTips => self
                .gateway
                .practical_tips(&lookup())
                .await
                .map(Payload::Tips),
            IntentKind::SearchFlights => {
                let query = FlightQuery {
                    origin: required(slots, names::ORIGIN),
                    destination: required(slots, names::DESTINATION),
                    date: required(slots, names::DATE),
                    return_date: slots.text(names::RETURN_DATE),
                    adults: party_size,
                };
                self.gateway.search_flights(&query).await.map(Payload::Flights)
            }
            IntentKind::SearchHotels => {
                let query = HotelQuery {
                    location: required(slots, names::DESTINATION),
                    check_in: required(slots, names::DATE),
                    check_out: slots.text(names::RETURN_DATE),
                };
                self.gateway.search_hotels(&query).await.map(Payload::Hotels)
            }
            // Handled in `dispatch` without a generic fetch.
            IntentKind::SearchAccommodation
            | IntentKind::CompareDestinations
            | IntentKind::ValidateBudget
            | IntentKind::Fallback => Err(FailureKind::InvalidPayload),
        }
    }
}

/// Value of a slot already checked by `missing_slot`.
fn required(slots: &SlotSnapshot, slot: &str) -> String {
    slots.text(slot).unwrap_or_default()
}

fn validate_budget(slots: &SlotSnapshot) -> Reply {
    let budget = required(slots, names::BUDGET);
    if is_valid_budget(&budget) {
        renderer::budget_verdict(true, &budget)
    } else {
        renderer::budget_verdict(false, &budget).with_mutation(SlotMutation::clear(names::BUDGET))
    }
}
