//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRAVEL_ASSISTANT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use travel_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod gateway;
mod nlu;
mod server;

pub use auth::{AuthConfig, MIN_JWT_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use gateway::{AdapterConfig, AdapterKind, AdapterSettings, GatewayConfig};
pub use nlu::NluConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Bearer token validation
    pub auth: AuthConfig,

    /// Outbound travel data adapters
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// NLU engine used by the chat endpoint
    #[serde(default)]
    pub nlu: NluConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRAVEL_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TRAVEL_ASSISTANT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRAVEL_ASSISTANT__GATEWAY__FLIGHTS__API_KEY=...` -> `gateway.flights.api_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRAVEL_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.gateway.validate()?;
        self.nlu.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const SECRET: &str = "a-signing-secret-that-is-long-enough";

    fn set_minimal_env() {
        env::set_var("TRAVEL_ASSISTANT__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("TRAVEL_ASSISTANT__AUTH__JWT_SECRET", SECRET);
    }

    fn clear_env() {
        for key in [
            "TRAVEL_ASSISTANT__DATABASE__URL",
            "TRAVEL_ASSISTANT__AUTH__JWT_SECRET",
            "TRAVEL_ASSISTANT__SERVER__PORT",
            "TRAVEL_ASSISTANT__SERVER__ENVIRONMENT",
            "TRAVEL_ASSISTANT__GATEWAY__BACKEND_URL",
            "TRAVEL_ASSISTANT__GATEWAY__FLIGHTS__TIMEOUT_MS",
            "TRAVEL_ASSISTANT__GATEWAY__FLIGHTS__API_KEY",
        ] {
            env::remove_var(key);
        }
    }

    fn load_with<F: FnOnce()>(extra: F) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        extra();
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let config = load_with(|| {}).expect("config loads");
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_to_optional_sections() {
        let config = load_with(|| {}).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.gateway.backend_url, "http://localhost:8000");
        assert_eq!(config.nlu.timeout_secs, 5);
    }

    #[test]
    fn test_nested_gateway_overrides() {
        let config = load_with(|| {
            env::set_var("TRAVEL_ASSISTANT__GATEWAY__BACKEND_URL", "http://backend:8000");
            env::set_var("TRAVEL_ASSISTANT__GATEWAY__FLIGHTS__TIMEOUT_MS", "1500");
            env::set_var("TRAVEL_ASSISTANT__GATEWAY__FLIGHTS__API_KEY", "aviation-key");
        })
        .unwrap();

        let flights = config.gateway.settings(AdapterKind::Flights);
        assert_eq!(flights.timeout, Duration::from_millis(1500));
        assert!(flights.api_key.is_some());
        assert_eq!(
            config.gateway.settings(AdapterKind::Catalog).base_url,
            "http://backend:8000"
        );
    }

    #[test]
    fn test_is_production() {
        let config = load_with(|| {
            env::set_var("TRAVEL_ASSISTANT__SERVER__ENVIRONMENT", "production");
        })
        .unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_missing_database_section_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("TRAVEL_ASSISTANT__AUTH__JWT_SECRET", SECRET);
        let result = AppConfig::load();
        clear_env();
        assert!(result.is_err());
    }
}
