//! Outbound HTTP with bounded retry on transient server errors.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::warn;

/// Total attempts per logical call (initial request + retries).
const MAX_ATTEMPTS: u32 = 3;
/// Statuses retried with backoff. Everything else fails immediately.
const RETRY_STATUSES: [u16; 4] = [500, 502, 503, 504];

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("retries exhausted (last status {status})")]
    RetriesExhausted { status: u16 },

    #[error("request error: {0}")]
    Request(String),
}

/// HTTP executor that retries {500, 502, 503, 504} up to three attempts with
/// exponential backoff (1s, 2s) plus random jitter. Connection failures and
/// timeouts are reported as distinct kinds so callers can produce targeted
/// messages.
#[derive(Debug, Clone)]
pub struct RetryingClient {
    timeout: Duration,
    backoff_base: Duration,
}

impl RetryingClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            backoff_base: Duration::from_secs(1),
        }
    }

    /// Override the backoff base. Tests use a near-zero base.
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Execute one logical call. A fresh `reqwest::Client` (and connection
    /// pool) is built for the call and dropped when this scope ends; the
    /// `build` closure is re-invoked for each attempt.
    pub async fn execute<F>(&self, build: F) -> Result<reqwest::Response, TransportError>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let mut attempt = 0u32;
        loop {
            let response = match build(&client).send().await {
                Ok(response) => response,
                Err(e) if e.is_timeout() => return Err(TransportError::Timeout),
                Err(e) if e.is_connect() => return Err(TransportError::Connect(e.to_string())),
                Err(e) => return Err(TransportError::Request(e.to_string())),
            };

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let code = status.as_u16();
            if RETRY_STATUSES.contains(&code) {
                attempt += 1;
                if attempt >= MAX_ATTEMPTS {
                    return Err(TransportError::RetriesExhausted { status: code });
                }
                let backoff = self.backoff_base * 2u32.pow(attempt - 1);
                let jitter = Duration::from_millis(rand::rng().random_range(0..250));
                warn!(
                    status = code,
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "transient server error, retrying after backoff"
                );
                tokio::time::sleep(backoff + jitter).await;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status: code, body });
        }
    }
}
