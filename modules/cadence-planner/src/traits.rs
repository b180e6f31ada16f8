//! Seams between the pipeline and its backends. Tests stub these; the real
//! clients implement them below.

use anyhow::Result;
use async_trait::async_trait;

use cadence_common::{ImageResult, SearchResult};
use openrouter_client::{GenerationError, OpenRouterClient};
use pixabay_client::PixabayClient;
use serpapi_client::{SearchVertical, SerpApiClient};

/// One prompt in, generated text out. Errors carry a kind the orchestrator
/// can branch on; any error here is fatal to the run.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, GenerationError>;
}

/// Vertical-selectable web search. Failures are swallowed by the resource
/// aggregator, never by implementations.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, vertical: SearchVertical) -> Result<Vec<SearchResult>>;
}

#[async_trait]
pub trait ImageSearcher: Send + Sync {
    async fn search_images(&self, query: &str, count: u32) -> Result<Vec<ImageResult>>;
}

#[async_trait]
impl ContentGenerator for OpenRouterClient {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, GenerationError> {
        OpenRouterClient::complete(self, prompt, temperature).await
    }
}

#[async_trait]
impl WebSearcher for SerpApiClient {
    async fn search(&self, query: &str, vertical: SearchVertical) -> Result<Vec<SearchResult>> {
        Ok(SerpApiClient::search(self, query, vertical).await?)
    }
}

#[async_trait]
impl ImageSearcher for PixabayClient {
    async fn search_images(&self, query: &str, count: u32) -> Result<Vec<ImageResult>> {
        Ok(PixabayClient::search_images(self, query, count).await?)
    }
}
