//! Travel gateway configuration
//!
//! Every adapter can override its base URL, API key, timeout and retry
//! budget. Unset values fall back to the adapter's defaults: backend-backed
//! adapters call `backend_url`, emergency info gets a shorter timeout, and
//! only flight search retries.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::nlu::is_http_url;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Default timeout for emergency lookups.
pub const EMERGENCY_TIMEOUT_MS: u64 = 3_000;
/// Default attempt budget of retry-eligible adapters.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const MAX_ATTEMPTS_CAP: u32 = 5;

/// Downstream capabilities with their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Destination and accommodation catalog.
    Catalog,
    Comparison,
    Emergency,
    /// Entry requirements and practical tips.
    Advisory,
    Flights,
    Hotels,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 6] = [
        AdapterKind::Catalog,
        AdapterKind::Comparison,
        AdapterKind::Emergency,
        AdapterKind::Advisory,
        AdapterKind::Flights,
        AdapterKind::Hotels,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdapterKind::Catalog => "catalog",
            AdapterKind::Comparison => "comparison",
            AdapterKind::Emergency => "emergency",
            AdapterKind::Advisory => "advisory",
            AdapterKind::Flights => "flights",
            AdapterKind::Hotels => "hotels",
        }
    }
}

/// Optional overrides for one adapter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    pub base_url: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub timeout_ms: Option<u64>,
    pub max_attempts: Option<u32>,
}

/// Effective settings of one adapter after defaults are applied.
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    pub base_url: String,
    pub api_key: Option<Secret<String>>,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub retry_backoff: Duration,
}

/// Travel gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of this service's own API, used by the catalog,
    /// comparison, emergency and advisory adapters
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// First retry delay; doubles on each further attempt
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_ms: u64,

    #[serde(default)]
    pub catalog: AdapterConfig,
    #[serde(default)]
    pub comparison: AdapterConfig,
    #[serde(default)]
    pub emergency: AdapterConfig,
    #[serde(default)]
    pub advisory: AdapterConfig,
    #[serde(default)]
    pub flights: AdapterConfig,
    #[serde(default)]
    pub hotels: AdapterConfig,
}

impl GatewayConfig {
    fn overrides(&self, kind: AdapterKind) -> &AdapterConfig {
        match kind {
            AdapterKind::Catalog => &self.catalog,
            AdapterKind::Comparison => &self.comparison,
            AdapterKind::Emergency => &self.emergency,
            AdapterKind::Advisory => &self.advisory,
            AdapterKind::Flights => &self.flights,
            AdapterKind::Hotels => &self.hotels,
        }
    }

    /// Effective settings for one adapter.
    pub fn settings(&self, kind: AdapterKind) -> AdapterSettings {
        let overrides = self.overrides(kind);

        let default_base = match kind {
            AdapterKind::Flights => default_flights_url(),
            AdapterKind::Hotels => default_hotels_url(),
            _ => self.backend_url.clone(),
        };
        let default_timeout = match kind {
            AdapterKind::Emergency => EMERGENCY_TIMEOUT_MS,
            _ => DEFAULT_TIMEOUT_MS,
        };
        let default_attempts = match kind {
            AdapterKind::Flights => DEFAULT_RETRY_ATTEMPTS,
            _ => 1,
        };

        AdapterSettings {
            base_url: overrides
                .base_url
                .clone()
                .unwrap_or(default_base)
                .trim_end_matches('/')
                .to_string(),
            // A blank key in the environment counts as no key.
            api_key: overrides
                .api_key
                .clone()
                .filter(|key| !key.expose_secret().trim().is_empty()),
            timeout: Duration::from_millis(overrides.timeout_ms.unwrap_or(default_timeout)),
            max_attempts: overrides.max_attempts.unwrap_or(default_attempts),
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.backend_url) {
            return Err(ValidationError::InvalidUrl("gateway.backend_url"));
        }
        for kind in AdapterKind::ALL {
            let overrides = self.overrides(kind);
            if let Some(url) = &overrides.base_url {
                if !is_http_url(url) {
                    return Err(ValidationError::InvalidUrl(kind.name()));
                }
            }
            if matches!(overrides.timeout_ms, Some(0)) || overrides.timeout_ms > Some(60_000) {
                return Err(ValidationError::InvalidAdapterTimeout(kind.name()));
            }
            if let Some(attempts) = overrides.max_attempts {
                if attempts == 0 || attempts > MAX_ATTEMPTS_CAP {
                    return Err(ValidationError::InvalidRetryBudget(kind.name()));
                }
            }
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            retry_backoff_ms: default_retry_backoff(),
            catalog: AdapterConfig::default(),
            comparison: AdapterConfig::default(),
            emergency: AdapterConfig::default(),
            advisory: AdapterConfig::default(),
            flights: AdapterConfig::default(),
            hotels: AdapterConfig::default(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_retry_backoff() -> u64 {
    500
}

fn default_flights_url() -> String {
    "http://api.aviationstack.com/v1".to_string()
}

fn default_hotels_url() -> String {
    "https://booking-api.example.com/v1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_adapters_default_to_backend_url() {
        let config = GatewayConfig {
            backend_url: "http://backend:8000/".to_string(),
            ..Default::default()
        };
        for kind in [
            AdapterKind::Catalog,
            AdapterKind::Comparison,
            AdapterKind::Emergency,
            AdapterKind::Advisory,
        ] {
            assert_eq!(config.settings(kind).base_url, "http://backend:8000");
        }
    }

    #[test]
    fn emergency_has_the_short_timeout() {
        let config = GatewayConfig::default();
        assert_eq!(config.settings(AdapterKind::Emergency).timeout, Duration::from_millis(3_000));
        assert_eq!(config.settings(AdapterKind::Catalog).timeout, Duration::from_millis(5_000));
    }

    #[test]
    fn only_flights_retry_by_default() {
        let config = GatewayConfig::default();
        for kind in AdapterKind::ALL {
            let expected = if kind == AdapterKind::Flights { 3 } else { 1 };
            assert_eq!(config.settings(kind).max_attempts, expected, "{}", kind.name());
        }
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = GatewayConfig {
            hotels: AdapterConfig {
                base_url: Some("http://127.0.0.1:9000".to_string()),
                api_key: Some(Secret::new("k".to_string())),
                timeout_ms: Some(250),
                max_attempts: Some(2),
            },
            ..Default::default()
        };
        let settings = config.settings(AdapterKind::Hotels);
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
        assert!(settings.api_key.is_some());
        assert_eq!(settings.timeout, Duration::from_millis(250));
        assert_eq!(settings.max_attempts, 2);
    }

    #[test]
    fn blank_api_keys_are_treated_as_unset() {
        let config = GatewayConfig {
            flights: AdapterConfig {
                api_key: Some(Secret::new(String::new())),
                ..Default::default()
            },
            hotels: AdapterConfig {
                api_key: Some(Secret::new("  ".to_string())),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.settings(AdapterKind::Flights).api_key.is_none());
        assert!(config.settings(AdapterKind::Hotels).api_key.is_none());
    }

    #[test]
    fn validation_rejects_bad_overrides() {
        let bad_url = GatewayConfig {
            flights: AdapterConfig {
                base_url: Some("ftp://example".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(bad_url.validate(), Err(ValidationError::InvalidUrl("flights")));

        let zero_attempts = GatewayConfig {
            flights: AdapterConfig {
                max_attempts: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            zero_attempts.validate(),
            Err(ValidationError::InvalidRetryBudget("flights"))
        );

        let zero_timeout = GatewayConfig {
            emergency: AdapterConfig {
                timeout_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            zero_timeout.validate(),
            Err(ValidationError::InvalidAdapterTimeout("emergency"))
        );
    }
}
