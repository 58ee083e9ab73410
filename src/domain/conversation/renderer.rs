//! Reply rendering.
//!
//! `render` is a pure function of the intent kind, the adapter result and a
//! small context taken from the slots. Successful non-empty payloads use a
//! per-kind template, empty payloads a fixed "no results" text, and every
//! failure a fixed apology that never echoes transport details.

use crate::domain::travel::{
    CatalogItem, ComparisonOutcome, EmergencyContacts, FailureKind, FlightOffer, HotelOffer,
    PracticalTips, TravelRestrictions,
};

use super::intent::IntentKind;
use super::reply::Reply;
use super::slots::{names, SlotSnapshot};

/// Maximum destinations listed in one reply.
pub const MAX_LISTED_DESTINATIONS: usize = 5;
/// Maximum accommodations, flights or hotels listed in one reply.
pub const MAX_LISTED_OPTIONS: usize = 3;

const FALLBACK_DESTINATION: &str = "your destination";

/// Successful adapter output, one variant per gateway capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Destinations(Vec<CatalogItem>),
    Accommodations(Vec<CatalogItem>),
    Comparison(ComparisonOutcome),
    Emergency(EmergencyContacts),
    Restrictions(TravelRestrictions),
    Tips(PracticalTips),
    Flights(Vec<FlightOffer>),
    Hotels(Vec<HotelOffer>),
}

/// Slot values the templates interpolate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub destination: Option<String>,
    pub origin: Option<String>,
    pub date: Option<String>,
    pub destination1: Option<String>,
    pub destination2: Option<String>,
}

impl RenderContext {
    pub fn from_slots(slots: &SlotSnapshot) -> Self {
        Self {
            destination: slots.text(names::DESTINATION),
            origin: slots.text(names::ORIGIN),
            date: slots.text(names::DATE),
            destination1: slots.text(names::DESTINATION1),
            destination2: slots.text(names::DESTINATION2),
        }
    }

    fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or(FALLBACK_DESTINATION)
    }

    fn pair(&self) -> (&str, &str) {
        (
            self.destination1.as_deref().unwrap_or("the first destination"),
            self.destination2.as_deref().unwrap_or("the second destination"),
        )
    }
}

/// Renders the reply for one adapter result.
pub fn render(kind: IntentKind, result: &Result<Payload, FailureKind>, ctx: &RenderContext) -> Reply {
    let text = match result {
        Err(_) => failure_text(kind, ctx),
        Ok(payload) => match success_text(kind, payload, ctx) {
            Rendered::Text(text) => text,
            Rendered::Empty => empty_text(kind, ctx),
            Rendered::Mismatch => failure_text(kind, ctx),
        },
    };
    Reply::text(text)
}

/// Reply for a handler whose required slot is unset.
pub fn clarification(kind: IntentKind, missing_slot: &str) -> Reply {
    let text = match (kind, missing_slot) {
        (IntentKind::CompareDestinations, _) => {
            "Please specify two different destinations to compare.".to_string()
        }
        (IntentKind::ValidateBudget, _) => {
            "Please tell me your budget, for example 500€ or 1000 USD.".to_string()
        }
        (_, names::ORIGIN) => "Please specify a departure city.".to_string(),
        (_, names::PARTY_SIZE) => "How many travellers? Please give a number, for example 2.".to_string(),
        (IntentKind::SearchHotels, names::DATE) => "Please specify a check-in date.".to_string(),
        (_, names::DATE) => "Please specify a travel date.".to_string(),
        _ => "Please specify a destination.".to_string(),
    };
    Reply::text(text)
}

/// Reply for unknown intents and the explicit fallback action.
pub fn rephrase() -> Reply {
    Reply::text("Sorry, I didn't quite understand. Could you rephrase that?")
}

/// Reply after checking the budget slot.
pub fn budget_verdict(valid: bool, budget: &str) -> Reply {
    if valid {
        Reply::text(format!("Got it, I'll plan around a budget of {}.", budget.trim()))
    } else {
        Reply::text("Invalid budget format. Example: 500€ or 1000 USD.")
    }
}

enum Rendered {
    Text(String),
    Empty,
    Mismatch,
}

fn success_text(kind: IntentKind, payload: &Payload, ctx: &RenderContext) -> Rendered {
    match (kind, payload) {
        (IntentKind::SuggestDestinations, Payload::Destinations(items)) => {
            if items.is_empty() {
                return Rendered::Empty;
            }
            let shown = first_names(items, MAX_LISTED_DESTINATIONS);
            Rendered::Text(format!("Here are {} suggestions: {}", shown.len(), shown.join(", ")))
        }
        (IntentKind::SearchAccommodation, Payload::Accommodations(items)) => {
            if items.is_empty() {
                return Rendered::Empty;
            }
            let shown = first_names(items, MAX_LISTED_OPTIONS);
            Rendered::Text(format!("Options in {}: {}", ctx.destination(), shown.join(", ")))
        }
        (IntentKind::CompareDestinations, Payload::Comparison(outcome)) => {
            if let Some(summary) = outcome.summary.as_deref().filter(|s| !s.trim().is_empty()) {
                return Rendered::Text(summary.to_string());
            }
            let (first, second) = ctx.pair();
            Rendered::Text(format!(
                "Comparison between {} and {}:\n- Best for beaches: {}\n- Best for culture: {}",
                first,
                second,
                or_default(&outcome.beach, "N/A"),
                or_default(&outcome.culture, "N/A"),
            ))
        }
        (IntentKind::EmergencyInfo, Payload::Emergency(contacts)) => {
            if contacts.police.is_none() && contacts.embassy.is_none() && contacts.hospitals.is_none() {
                return Rendered::Empty;
            }
            Rendered::Text(format!(
                "Emergency contacts in {}:\n- Police: {}\n- Embassy: {}\n- Hospitals: {}",
                ctx.destination(),
                or_default(&contacts.police, "112/911"),
                or_default(&contacts.embassy, "Not available"),
                or_default(&contacts.hospitals, "Not available"),
            ))
        }
        (IntentKind::TravelRestrictions, Payload::Restrictions(r)) => {
            if r.visa.is_none() && r.vaccines.is_none() && r.covid.is_none() {
                return Rendered::Empty;
            }
            Rendered::Text(format!(
                "Entry requirements for {}:\n- Visa: {}\n- Vaccines: {}\n- COVID: {}",
                ctx.destination(),
                or_default(&r.visa, "Not required"),
                or_default(&r.vaccines, "None"),
                or_default(&r.covid, "No restrictions"),
            ))
        }
        (IntentKind::PracticalTips, Payload::Tips(tips)) => {
            if tips.currency.is_none() && tips.plug_adapter.is_none() && tips.safety.is_none() {
                return Rendered::Empty;
            }
            Rendered::Text(format!(
                "Practical tips for {}:\n- Currency: {}\n- Plug adapter: {}\n- Safety: {}",
                ctx.destination(),
                or_default(&tips.currency, "Not specified"),
                or_default(&tips.plug_adapter, "Not specified"),
                or_default(&tips.safety, "Standard precautions"),
            ))
        }
        (IntentKind::SearchFlights, Payload::Flights(flights)) => {
            if flights.is_empty() {
                return Rendered::Empty;
            }
            let shown: Vec<String> = flights
                .iter()
                .take(MAX_LISTED_OPTIONS)
                .map(describe_flight)
                .collect();
            Rendered::Text(format!(
                "Flights from {} to {}: {}",
                ctx.origin.as_deref().unwrap_or("your departure city"),
                ctx.destination(),
                shown.join("; ")
            ))
        }
        (IntentKind::SearchHotels, Payload::Hotels(hotels)) => {
            if hotels.is_empty() {
                return Rendered::Empty;
            }
            let shown: Vec<String> = hotels
                .iter()
                .take(MAX_LISTED_OPTIONS)
                .map(describe_hotel)
                .collect();
            Rendered::Text(format!("Hotels in {}: {}", ctx.destination(), shown.join(", ")))
        }
        _ => Rendered::Mismatch,
    }
}

fn empty_text(kind: IntentKind, ctx: &RenderContext) -> String {
    match kind {
        IntentKind::SuggestDestinations => {
            "No destinations match these criteria. Try widening your search.".to_string()
        }
        IntentKind::SearchAccommodation => {
            format!("No accommodation found in {}.", ctx.destination())
        }
        IntentKind::CompareDestinations => {
            let (first, second) = ctx.pair();
            format!("I have no comparison data for {} and {}.", first, second)
        }
        IntentKind::EmergencyInfo => format!(
            "I have no emergency contacts on file for {}. Dial 112 in Europe or 911 in North America.",
            ctx.destination()
        ),
        IntentKind::TravelRestrictions => {
            format!("No entry requirements are listed for {}.", ctx.destination())
        }
        IntentKind::PracticalTips => {
            format!("No practical tips are listed for {} yet.", ctx.destination())
        }
        IntentKind::SearchFlights => format!(
            "No flights found from {} to {} on {}.",
            ctx.origin.as_deref().unwrap_or("your departure city"),
            ctx.destination(),
            ctx.date.as_deref().unwrap_or("that date"),
        ),
        IntentKind::SearchHotels => format!("No hotels available in {} for those dates.", ctx.destination()),
        IntentKind::ValidateBudget | IntentKind::Fallback => rephrase().text,
    }
}

fn failure_text(kind: IntentKind, ctx: &RenderContext) -> String {
    match kind {
        IntentKind::SuggestDestinations => {
            "I couldn't reach the destination recommendations right now. Please try again with other criteria.".to_string()
        }
        IntentKind::SearchAccommodation => format!(
            "Sorry, the accommodation search in {} failed. Please try again in a moment.",
            ctx.destination()
        ),
        IntentKind::CompareDestinations => {
            let (first, second) = ctx.pair();
            format!("Sorry, I couldn't compare {} and {} right now.", first, second)
        }
        IntentKind::EmergencyInfo => format!(
            "I couldn't retrieve emergency contacts for {}. In an emergency dial 112 in Europe or 911 in North America, and contact your embassy.",
            ctx.destination()
        ),
        IntentKind::TravelRestrictions => format!(
            "Sorry, I couldn't check the entry requirements for {}. Please consult your government's travel advice.",
            ctx.destination()
        ),
        IntentKind::PracticalTips => format!(
            "Sorry, I couldn't retrieve practical tips for {} right now.",
            ctx.destination()
        ),
        IntentKind::SearchFlights => {
            "Sorry, flight search is unavailable right now. Please try again in a few minutes.".to_string()
        }
        IntentKind::SearchHotels => format!(
            "Sorry, hotel search in {} is unavailable right now. Please try again later.",
            ctx.destination()
        ),
        IntentKind::ValidateBudget | IntentKind::Fallback => rephrase().text,
    }
}

fn first_names(items: &[CatalogItem], max: usize) -> Vec<&str> {
    items.iter().take(max).map(|item| item.name.as_str()).collect()
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn describe_flight(flight: &FlightOffer) -> String {
    let label = [flight.airline.as_deref(), flight.flight_number.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let label = if label.is_empty() { "Flight".to_string() } else { label };
    match &flight.departure {
        Some(departure) => format!("{} departing {}", label, departure),
        None => label,
    }
}

fn describe_hotel(hotel: &HotelOffer) -> String {
    match hotel.price {
        Some(price) => format!("{} ({} per night)", hotel.name, price),
        None => hotel.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paris() -> RenderContext {
        RenderContext {
            destination: Some("Paris".to_string()),
            ..Default::default()
        }
    }

    fn items(labels: &[&str]) -> Vec<CatalogItem> {
        labels.iter().map(|n| CatalogItem::new(*n)).collect()
    }

    const FAILURES: [FailureKind; 7] = [
        FailureKind::Timeout,
        FailureKind::Unreachable,
        FailureKind::InvalidPayload,
        FailureKind::BadStatus(404),
        FailureKind::BadStatus(429),
        FailureKind::BadStatus(500),
        FailureKind::BadStatus(503),
    ];

    #[test]
    fn six_destinations_list_the_first_five() {
        let result = Ok(Payload::Destinations(items(&["A", "B", "C", "D", "E", "F"])));
        let reply = render(IntentKind::SuggestDestinations, &result, &RenderContext::default());
        assert_eq!(reply.text, "Here are 5 suggestions: A, B, C, D, E");
        assert!(reply.slot_mutations.is_empty());
    }

    #[test]
    fn accommodations_are_capped_at_three() {
        let result = Ok(Payload::Accommodations(items(&["H1", "H2", "H3", "H4"])));
        let reply = render(IntentKind::SearchAccommodation, &result, &paris());
        assert_eq!(reply.text, "Options in Paris: H1, H2, H3");
    }

    #[test]
    fn emergency_lines_follow_police_embassy_hospitals_order() {
        let contacts = EmergencyContacts {
            police: Some("17".to_string()),
            embassy: Some("N/A".to_string()),
            hospitals: Some("Necker".to_string()),
        };
        let reply = render(IntentKind::EmergencyInfo, &Ok(Payload::Emergency(contacts)), &paris());
        let lines: Vec<&str> = reply.text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Emergency contacts in Paris:",
                "- Police: 17",
                "- Embassy: N/A",
                "- Hospitals: Necker"
            ]
        );
    }

    #[test]
    fn emergency_partial_payload_fills_defaults() {
        let contacts = EmergencyContacts {
            embassy: Some("+1 212".to_string()),
            ..Default::default()
        };
        let reply = render(IntentKind::EmergencyInfo, &Ok(Payload::Emergency(contacts)), &paris());
        assert!(reply.text.contains("- Police: 112/911"));
        assert!(reply.text.contains("- Hospitals: Not available"));
    }

    #[test]
    fn empty_results_differ_from_failures() {
        let empty = render(
            IntentKind::SuggestDestinations,
            &Ok(Payload::Destinations(vec![])),
            &RenderContext::default(),
        );
        let timeout = render(
            IntentKind::SuggestDestinations,
            &Err(FailureKind::Timeout),
            &RenderContext::default(),
        );
        assert_ne!(empty.text, timeout.text);
        assert!(empty.text.contains("No destinations"));
    }

    #[test]
    fn comparison_prefers_provider_summary() {
        let outcome = ComparisonOutcome {
            summary: Some("Rome wins on food".to_string()),
            ..Default::default()
        };
        let reply = render(
            IntentKind::CompareDestinations,
            &Ok(Payload::Comparison(outcome)),
            &RenderContext::default(),
        );
        assert_eq!(reply.text, "Rome wins on food");
    }

    #[test]
    fn comparison_without_summary_uses_template() {
        let ctx = RenderContext {
            destination1: Some("Nice".to_string()),
            destination2: Some("Rome".to_string()),
            ..Default::default()
        };
        let outcome = ComparisonOutcome {
            beach: Some("Nice".to_string()),
            ..Default::default()
        };
        let reply = render(IntentKind::CompareDestinations, &Ok(Payload::Comparison(outcome)), &ctx);
        assert!(reply.text.starts_with("Comparison between Nice and Rome:"));
        assert!(reply.text.contains("- Best for beaches: Nice"));
        assert!(reply.text.contains("- Best for culture: N/A"));
    }

    #[test]
    fn mismatched_payload_renders_the_failure_text() {
        let mismatched = render(
            IntentKind::EmergencyInfo,
            &Ok(Payload::Destinations(items(&["A"]))),
            &paris(),
        );
        let failed = render(IntentKind::EmergencyInfo, &Err(FailureKind::InvalidPayload), &paris());
        assert_eq!(mismatched, failed);
    }

    #[test]
    fn emergency_failure_gives_actionable_numbers() {
        let reply = render(IntentKind::EmergencyInfo, &Err(FailureKind::Timeout), &paris());
        assert!(reply.text.contains("112"));
        assert!(reply.text.contains("embassy"));
    }

    #[test]
    fn flights_list_labels_and_departures() {
        let ctx = RenderContext {
            origin: Some("CDG".to_string()),
            destination: Some("JFK".to_string()),
            ..Default::default()
        };
        let flights = vec![FlightOffer {
            airline: Some("Air France".to_string()),
            flight_number: Some("AF006".to_string()),
            departure: Some("2025-07-01T10:00:00+00:00".to_string()),
            arrival: None,
        }];
        let reply = render(IntentKind::SearchFlights, &Ok(Payload::Flights(flights)), &ctx);
        assert_eq!(
            reply.text,
            "Flights from CDG to JFK: Air France AF006 departing 2025-07-01T10:00:00+00:00"
        );
    }

    #[test]
    fn hotels_show_price_when_known() {
        let hotels = vec![
            HotelOffer { name: "Le Petit".to_string(), price: Some(120.0) },
            HotelOffer { name: "Grand".to_string(), price: None },
        ];
        let reply = render(IntentKind::SearchHotels, &Ok(Payload::Hotels(hotels)), &paris());
        assert_eq!(reply.text, "Hotels in Paris: Le Petit (120 per night), Grand");
    }

    #[test]
    fn every_failure_renders_a_clean_apology_for_every_kind() {
        for kind in IntentKind::ALL {
            for failure in FAILURES {
                let reply = render(kind, &Err(failure), &paris());
                assert!(!reply.text.is_empty());
                assert!(!reply.text.contains("Exception"));
                if let FailureKind::BadStatus(code) = failure {
                    assert!(!reply.text.contains(&code.to_string()), "{kind}: {}", reply.text);
                }
            }
        }
    }

    #[test]
    fn clarifications_name_what_is_missing() {
        assert_eq!(
            clarification(IntentKind::EmergencyInfo, names::DESTINATION).text,
            "Please specify a destination."
        );
        assert_eq!(
            clarification(IntentKind::CompareDestinations, names::DESTINATION2).text,
            "Please specify two different destinations to compare."
        );
        assert_eq!(
            clarification(IntentKind::SearchFlights, names::ORIGIN).text,
            "Please specify a departure city."
        );
    }

    #[test]
    fn budget_verdicts() {
        assert!(budget_verdict(true, " 500€ ").text.contains("500€"));
        assert!(budget_verdict(false, "lots").text.starts_with("Invalid budget format"));
    }

    fn any_failure() -> impl Strategy<Value = FailureKind> {
        prop_oneof![
            Just(FailureKind::Timeout),
            Just(FailureKind::Unreachable),
            Just(FailureKind::InvalidPayload),
            (400u16..600).prop_map(FailureKind::BadStatus),
        ]
    }

    fn any_kind() -> impl Strategy<Value = IntentKind> {
        (0..IntentKind::ALL.len()).prop_map(|i| IntentKind::ALL[i])
    }

    proptest! {
        #[test]
        fn failure_text_never_leaks_status_codes(
            kind in any_kind(),
            failure in any_failure(),
            destination in "[A-Za-z ]{1,20}",
        ) {
            let ctx = RenderContext { destination: Some(destination), ..Default::default() };
            let reply = render(kind, &Err(failure), &ctx);
            prop_assert!(!reply.text.is_empty());
            prop_assert!(!reply.text.contains("Exception"));
            if let FailureKind::BadStatus(code) = failure {
                prop_assert!(!reply.text.contains(&code.to_string()));
            }
        }

        #[test]
        fn render_is_idempotent(
            kind in any_kind(),
            labels in proptest::collection::vec("[A-Za-z]{1,12}", 0..10),
        ) {
            let result = Ok(Payload::Destinations(labels.iter().map(CatalogItem::new).collect()));
            let ctx = paris();
            prop_assert_eq!(render(kind, &result, &ctx), render(kind, &result, &ctx));
        }

        #[test]
        fn destination_lists_never_exceed_the_cap(
            labels in proptest::collection::vec("[A-Za-z]{1,12}", 1..20),
        ) {
            let result = Ok(Payload::Destinations(labels.iter().map(CatalogItem::new).collect()));
            let reply = render(IntentKind::SuggestDestinations, &result, &RenderContext::default());
            let shown = labels.len().min(MAX_LISTED_DESTINATIONS);
            let expected_prefix = format!("Here are {} suggestions: ", shown);
            prop_assert!(reply.text.starts_with(&expected_prefix));
            let listed = reply.text.trim_start_matches(expected_prefix.as_str()).split(", ").count();
            prop_assert_eq!(listed, shown);
        }
    }
}
