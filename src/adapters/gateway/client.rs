//! Shared outbound call executor for the gateway adapters.
//!
//! Applies the adapter's timeout, maps transport errors, statuses and
//! undecodable bodies to `FailureKind`, and runs the retry loop for
//! adapters whose attempt budget is above one.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::AdapterSettings;
use crate::domain::travel::{FailureKind, Params};

/// One configured downstream endpoint family.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    name: &'static str,
    client: Client,
    base_url: String,
    timeout: Duration,
    max_attempts: u32,
    retry_backoff: Duration,
}

impl ProviderClient {
    pub fn new(name: &'static str, client: Client, settings: &AdapterSettings) -> Self {
        Self {
            name,
            client,
            base_url: settings.base_url.clone(),
            timeout: settings.timeout,
            max_attempts: settings.max_attempts.max(1),
            retry_backoff: settings.retry_backoff,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base}{path}?params` decoded as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, FailureKind> {
        let url = self.url(path);
        self.execute(|| self.client.get(&url).query(params)).await
    }

    /// `POST {base}{path}` with a JSON body, decoded as `T`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FailureKind>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(|| self.client.post(&url).json(body)).await
    }

    async fn execute<T, F>(&self, build: F) -> Result<T, FailureKind>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 1;
        loop {
            match self.attempt(build()).await {
                Ok(value) => {
                    tracing::debug!(adapter = self.name, attempt, "Provider call succeeded");
                    return Ok(value);
                }
                Err(failure) if failure.is_retryable() && attempt < self.max_attempts => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        adapter = self.name,
                        attempt,
                        failure = %failure,
                        delay_ms = delay.as_millis() as u64,
                        "Provider call failed, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(failure) => {
                    tracing::warn!(adapter = self.name, attempt, failure = %failure, "Provider call failed");
                    return Err(failure);
                }
            }
        }
    }

    /// Delay before the attempt following `attempt`: base, 2x base, 4x base...
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32 << (attempt - 1).min(16);
        self.retry_backoff.saturating_mul(factor)
    }

    async fn attempt<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FailureKind> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureKind::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_failure)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(adapter = self.name, error = %e, "Undecodable provider payload");
            FailureKind::InvalidPayload
        })
    }
}

fn transport_failure(e: reqwest::Error) -> FailureKind {
    if e.is_timeout() {
        FailureKind::Timeout
    } else if e.is_decode() {
        FailureKind::InvalidPayload
    } else {
        FailureKind::Unreachable
    }
}
