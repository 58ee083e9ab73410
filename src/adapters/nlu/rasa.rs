//! Rasa REST webhook client.
//!
//! Posts `{"sender", "message"}` to the webhook and joins the `text` fields
//! of the returned bot messages with a single space.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::NluConfig;
use crate::domain::conversation::UserMessage;
use crate::domain::foundation::ConversationId;
use crate::ports::{NluClient, NluError};

#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    sender: &'a str,
    message: &'a str,
}

/// One bot message; image or button messages carry no `text`.
#[derive(Debug, Deserialize)]
struct BotMessage {
    #[serde(default)]
    text: Option<String>,
}

/// NLU client backed by the Rasa REST channel.
#[derive(Debug, Clone)]
pub struct RasaNluClient {
    client: Client,
    webhook_url: String,
    timeout: Duration,
}

impl RasaNluClient {
    pub fn new(client: Client, config: &NluConfig) -> Self {
        Self {
            client,
            webhook_url: config.webhook_url.clone(),
            timeout: config.timeout(),
        }
    }
}

#[async_trait]
impl NluClient for RasaNluClient {
    async fn send(
        &self,
        sender: &ConversationId,
        message: &UserMessage,
    ) -> Result<Option<String>, NluError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(&WebhookRequest {
                sender: sender.as_str(),
                message: message.as_str(),
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NluError::Timeout
                } else {
                    NluError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NluError::BadStatus(status.as_u16()));
        }

        let messages: Vec<BotMessage> = response.json().await.map_err(|e| {
            tracing::debug!(error = %e, "Undecodable NLU response");
            NluError::InvalidResponse
        })?;

        Ok(join_texts(messages))
    }
}

fn join_texts(messages: Vec<BotMessage>) -> Option<String> {
    let texts: Vec<String> = messages
        .into_iter()
        .filter_map(|m| m.text)
        .filter(|t| !t.trim().is_empty())
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<BotMessage> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn texts_are_joined_with_a_space() {
        let messages = parse(r#"[{"recipient_id":"u","text":"Hello!"},{"image":"x.png"},{"text":"Where to?"}]"#);
        assert_eq!(join_texts(messages).as_deref(), Some("Hello! Where to?"));
    }

    #[test]
    fn no_text_yields_none() {
        assert_eq!(join_texts(parse("[]")), None);
        assert_eq!(join_texts(parse(r#"[{"image":"x.png"}]"#)), None);
    }

    #[tokio::test]
    async fn unreachable_server_is_reported() {
        let config = NluConfig {
            webhook_url: "http://127.0.0.1:1/webhooks/rest/webhook".to_string(),
            timeout_secs: 1,
        };
        let client = RasaNluClient::new(Client::new(), &config);
        let result = client
            .send(
                &ConversationId::new("s1").unwrap(),
                &UserMessage::parse("hello").unwrap(),
            )
            .await;
        assert!(matches!(result, Err(NluError::Unreachable(_))));
    }
}
