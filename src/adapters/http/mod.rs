//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with `dto`, `handlers` and `routes`;
//! `router` composes them.

pub mod accommodations;
pub mod actions;
pub mod chat;
pub mod destinations;
pub mod error;
pub mod health;
pub mod middleware;
pub mod router;
pub mod travel;

pub use error::ErrorResponse;
pub use router::{api_router, with_http_layers, AppServices};
