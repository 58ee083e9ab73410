//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT session validation
//! - `events` - Transcript channel from the action path to chat history
//! - `gateway` - HTTP clients for the travel data providers
//! - `http` - axum routes, DTOs and middleware
//! - `memory` - In-memory repositories for tests and local runs
//! - `nlu` - REST client for the NLU engine
//! - `postgres` - sqlx repositories and migrations

pub mod auth;
pub mod events;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod nlu;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use events::{transcript_channel, ChannelTranscriptPublisher, TranscriptRecorder};
pub use gateway::HttpTravelGateway;
pub use memory::{
    InMemoryAccommodationRepository, InMemoryChatHistoryRepository, InMemoryDestinationRepository,
};
pub use nlu::RasaNluClient;
pub use postgres::{
    PostgresAccommodationRepository, PostgresChatHistoryRepository, PostgresDestinationRepository,
};
