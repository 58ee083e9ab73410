//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, auth types, errors)
//! - `conversation` - Slots, intent table, replies and the reply renderer
//! - `travel` - Gateway queries, payloads and failure kinds
//! - `catalog` - Destination and accommodation records

pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod travel;
