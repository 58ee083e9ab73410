//! NLU engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where free-text chat messages are forwarded.
#[derive(Debug, Clone, Deserialize)]
pub struct NluConfig {
    /// REST webhook of the NLU server
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl NluConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.webhook_url) {
            return Err(ValidationError::InvalidUrl("nlu.webhook_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_webhook_url() -> String {
    "http://localhost:5005/webhooks/rest/webhook".to_string()
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_rest_webhook() {
        let config = NluConfig::default();
        assert!(config.webhook_url.ends_with("/webhooks/rest/webhook"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let config = NluConfig {
            webhook_url: "rasa:5005".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("nlu.webhook_url")));
    }
}
