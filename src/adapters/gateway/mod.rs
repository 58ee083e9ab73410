//! Travel gateway adapters - one per downstream capability.
//!
//! - `catalog` - destination and accommodation listings
//! - `comparison` - two-destination comparison
//! - `advisory` - emergency contacts, entry requirements, practical tips
//! - `aviation_stack` - flight search (retry-eligible)
//! - `booking` - hotel search
//!
//! `HttpTravelGateway` composes them behind the `TravelGateway` port.

mod advisory;
mod aviation_stack;
mod booking;
mod catalog;
mod client;
mod comparison;
mod http_gateway;

pub use client::ProviderClient;
pub use http_gateway::HttpTravelGateway;
