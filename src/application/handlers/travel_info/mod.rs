//! Travel info queries served to the gateway's backend-backed adapters.

mod compare_destinations;

pub use compare_destinations::{CompareDestinationsHandler, TravelInfoError};
