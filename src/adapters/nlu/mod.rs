//! NLU engine adapters.

mod rasa;

pub use rasa::RasaNluClient;
