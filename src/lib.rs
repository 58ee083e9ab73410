//! Travel Assistant - conversational travel planning backend
//!
//! This crate serves the action webhook of a conversational assistant:
//! recognized intents are dispatched to travel data providers and the
//! results rendered as replies. It also exposes the destination and
//! accommodation catalog those providers read from.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
