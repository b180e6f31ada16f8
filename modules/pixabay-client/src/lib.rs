pub mod error;

pub use error::{ImageError, Result};

use std::time::Duration;

use cadence_common::{ImageResult, RetryingClient};
use serde::Deserialize;
use tracing::info;

const PIXABAY_API_URL: &str = "https://pixabay.com/api/";

/// Free public API key shipped as the fallback when none is configured.
pub const DEFAULT_API_KEY: &str = "36897997-32ed5c1b2cd9b2ad2546d8d8e";

pub const DEFAULT_COUNT: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<ImageResult>,
}

/// Client for the Pixabay image API. Requests photographic,
/// horizontally-oriented images.
pub struct PixabayClient {
    api_key: String,
    base_url: String,
    http: RetryingClient,
}

impl PixabayClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: PIXABAY_API_URL.to_string(),
            http: RetryingClient::new(REQUEST_TIMEOUT),
        }
    }

    /// Point the client at a different endpoint. Tests use a local server.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Return up to `count` normalized image records for the query.
    pub async fn search_images(&self, query: &str, count: u32) -> Result<Vec<ImageResult>> {
        info!(query, count, "Pixabay image search");

        let per_page = count.to_string();
        let response = self
            .http
            .execute(|http| {
                http.get(&self.base_url).query(&[
                    ("key", self.api_key.as_str()),
                    ("q", query),
                    ("per_page", per_page.as_str()),
                    ("image_type", "photo"),
                    ("orientation", "horizontal"),
                ])
            })
            .await?;

        let payload: PixabayResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Parse(e.to_string()))?;

        let images: Vec<ImageResult> = payload
            .hits
            .into_iter()
            .take(count as usize)
            .collect();

        info!(query, count = images.len(), "Pixabay search complete");
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn requests_horizontal_photos_and_reads_hits() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("key", "pix-key"))
            .and(query_param("q", "fitness"))
            .and(query_param("per_page", "3"))
            .and(query_param("image_type", "photo"))
            .and(query_param("orientation", "horizontal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hits": [
                    {"previewURL": "https://cdn/1.jpg", "pageURL": "https://page/1", "tags": "gym"},
                    {"previewURL": "https://cdn/2.jpg", "pageURL": "https://page/2", "tags": "run"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PixabayClient::new("pix-key").with_base_url(&server.uri());
        let images = client.search_images("fitness", 3).await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].preview_url, "https://cdn/1.jpg");
        assert_eq!(images[1].tags, "run");
    }

    #[tokio::test]
    async fn caps_results_at_requested_count() {
        let server = MockServer::start().await;

        let hits: Vec<_> = (0..6)
            .map(|i| {
                serde_json::json!({
                    "previewURL": format!("https://cdn/{i}.jpg"),
                    "pageURL": format!("https://page/{i}"),
                    "tags": "tag"
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": hits})),
            )
            .mount(&server)
            .await;

        let client = PixabayClient::new("pix-key").with_base_url(&server.uri());
        let images = client.search_images("fitness", 3).await.unwrap();
        assert_eq!(images.len(), 3);
    }

    #[tokio::test]
    async fn missing_hits_key_is_an_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"total": 0})),
            )
            .mount(&server)
            .await;

        let client = PixabayClient::new("pix-key").with_base_url(&server.uri());
        let images = client.search_images("nothing", 3).await.unwrap();
        assert!(images.is_empty());
    }
}
