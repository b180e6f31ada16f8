pub mod error;
mod types;

pub use error::{Result, SearchError};

use std::time::Duration;

use cadence_common::{RetryingClient, SearchResult};
use tracing::info;

use types::SerpResponse;

const SERPAPI_URL: &str = "https://serpapi.com/search";

/// Results requested per query.
const RESULT_LIMIT: u32 = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Search vertical, mapped to the backend's engine parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchVertical {
    General,
    Scholarly,
    Video,
}

impl SearchVertical {
    pub fn engine(self) -> &'static str {
        match self {
            SearchVertical::General => "google",
            SearchVertical::Scholarly => "google_scholar",
            SearchVertical::Video => "youtube",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchVertical::General => "general",
            SearchVertical::Scholarly => "scholarly",
            SearchVertical::Video => "video",
        }
    }
}

pub struct SerpApiClient {
    api_key: String,
    base_url: String,
    http: RetryingClient,
}

impl SerpApiClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: SERPAPI_URL.to_string(),
            http: RetryingClient::new(REQUEST_TIMEOUT),
        }
    }

    /// Point the client at a different endpoint. Tests use a local server.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Search one vertical, returning up to five normalized records. The
    /// response key varies by vertical (`organic_results` for general and
    /// scholarly, `video_results` for video); a missing key reads as an
    /// empty result list.
    pub async fn search(
        &self,
        query: &str,
        vertical: SearchVertical,
    ) -> Result<Vec<SearchResult>> {
        info!(query, vertical = vertical.as_str(), "SerpAPI search");

        let limit = RESULT_LIMIT.to_string();
        let response = self
            .http
            .execute(|http| {
                http.get(&self.base_url).query(&[
                    ("api_key", self.api_key.as_str()),
                    ("engine", vertical.engine()),
                    ("q", query),
                    ("num", limit.as_str()),
                ])
            })
            .await?;

        let payload: SerpResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        let raw = match vertical {
            SearchVertical::Video => payload.video_results,
            _ => payload.organic_results,
        };

        let results: Vec<SearchResult> = raw
            .into_iter()
            .take(RESULT_LIMIT as usize)
            .map(Into::into)
            .collect();

        info!(query, count = results.len(), "SerpAPI search complete");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn verticals_map_to_engine_params() {
        assert_eq!(SearchVertical::General.engine(), "google");
        assert_eq!(SearchVertical::Scholarly.engine(), "google_scholar");
        assert_eq!(SearchVertical::Video.engine(), "youtube");
    }

    #[tokio::test]
    async fn general_search_reads_organic_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("engine", "google"))
            .and(query_param("q", "fitness tools software applications"))
            .and(query_param("num", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organic_results": [
                    {"title": "Tool A", "link": "https://a", "snippet": "First"},
                    {"title": "Tool B", "link": "https://b"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SerpApiClient::new("serp-key").with_base_url(&server.uri());
        let results = client
            .search("fitness tools software applications", SearchVertical::General)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Tool A");
        assert_eq!(results[0].snippet, "First");
        // Absent fields normalize to empty strings.
        assert_eq!(results[1].snippet, "");
        assert_eq!(results[1].thumbnail, "");
    }

    #[tokio::test]
    async fn video_search_reads_video_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("engine", "youtube"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "video_results": [
                    {"title": "Guide", "link": "https://v", "thumbnail": "https://thumb"}
                ],
                "organic_results": [
                    {"title": "Should be ignored", "link": "https://x"}
                ]
            })))
            .mount(&server)
            .await;

        let client = SerpApiClient::new("serp-key").with_base_url(&server.uri());
        let results = client
            .search("yoga tutorial guide", SearchVertical::Video)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Guide");
        assert_eq!(results[0].thumbnail, "https://thumb");
    }

    #[tokio::test]
    async fn missing_result_key_is_an_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"search_metadata": {"status": "Success"}})),
            )
            .mount(&server)
            .await;

        let client = SerpApiClient::new("serp-key").with_base_url(&server.uri());
        let results = client
            .search("anything", SearchVertical::Scholarly)
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
