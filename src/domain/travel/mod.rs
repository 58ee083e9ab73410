//! Travel data vocabulary shared by the gateway, the renderer and the
//! travel-info endpoints.

mod failure;
mod payload;
mod query;
pub mod reference;

pub use failure::FailureKind;
pub use payload::{
    CatalogItem, ComparisonOutcome, EmergencyContacts, FlightOffer, HotelOffer, PracticalTips,
    TravelRestrictions,
};
pub use query::{
    AccommodationQuery, ComparisonRequest, DestinationLookup, DestinationQuery, FlightQuery,
    HotelQuery, Params,
};
