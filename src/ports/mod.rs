//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Conversation Ports
//!
//! - `TravelGateway` - Outbound travel data capabilities
//! - `TranscriptPublisher` - Turn events for the history recorder
//! - `NluClient` - Free-text forwarding to the NLU engine
//!
//! ## Persistence Ports
//!
//! - `DestinationRepository`, `AccommodationRepository` - Catalog storage
//! - `ChatHistoryRepository` - Question/answer history
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Bearer token validation

mod accommodation_repository;
mod chat_history_repository;
mod destination_repository;
mod nlu_client;
mod session_validator;
mod transcript_publisher;
mod travel_gateway;

pub use accommodation_repository::AccommodationRepository;
pub use chat_history_repository::ChatHistoryRepository;
pub use destination_repository::DestinationRepository;
pub use nlu_client::{NluClient, NluError};
pub use session_validator::SessionValidator;
pub use transcript_publisher::TranscriptPublisher;
pub use travel_gateway::{GatewayResult, TravelGateway};
