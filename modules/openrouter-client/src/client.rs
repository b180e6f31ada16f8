use std::time::Duration;

use cadence_common::RetryingClient;
use tracing::debug;

use crate::error::GenerationError;
use crate::extract;
use crate::types::ChatRequest;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";

pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct:free";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const MAX_TOKENS: u32 = 2048;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the OpenRouter chat-completions API.
pub struct OpenRouterClient {
    api_key: String,
    model: String,
    base_url: String,
    http: RetryingClient,
    app_name: Option<String>,
    site_url: Option<String>,
}

impl OpenRouterClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: OPENROUTER_API_URL.to_string(),
            http: RetryingClient::new(REQUEST_TIMEOUT),
            app_name: None,
            site_url: None,
        }
    }

    /// Sent as `X-Title` so the backend can attribute traffic.
    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Sent as `HTTP-Referer`.
    pub fn with_site_url(mut self, url: &str) -> Self {
        self.site_url = Some(url.to_string());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at a different endpoint. Tests use a local server.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Send one prompt and return the generated text. Tolerates the
    /// backend's known response shapes; an unrecognized shape fails with
    /// the raw response attached for diagnosis.
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest::user_prompt(&self.model, prompt, temperature, MAX_TOKENS);

        debug!(model = %self.model, prompt_bytes = prompt.len(), "chat completion request");

        let response = self
            .http
            .execute(|http| {
                let mut req = http
                    .post(&url)
                    .bearer_auth(&self.api_key)
                    .header(reqwest::header::CONTENT_TYPE, "application/json");
                if let Some(ref site) = self.site_url {
                    req = req.header("HTTP-Referer", site);
                }
                if let Some(ref name) = self.app_name {
                    req = req.header("X-Title", name);
                }
                req.json(&request)
            })
            .await?;

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        extract::completion_text(&raw).ok_or_else(|| GenerationError::UnexpectedShape {
            raw: raw.to_string(),
        })
    }

    /// `complete` with the default temperature.
    pub async fn complete_default(&self, prompt: &str) -> Result<String, GenerationError> {
        self.complete(prompt, DEFAULT_TEMPERATURE).await
    }
}
