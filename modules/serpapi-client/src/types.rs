//! Raw response shapes. Field extraction is best-effort: anything absent or
//! of an unexpected type normalizes to an empty string.

use cadence_common::SearchResult;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct SerpResponse {
    #[serde(default)]
    pub organic_results: Vec<RawResult>,
    #[serde(default)]
    pub video_results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
pub struct RawResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: String,
}

/// Accept a string, or swallow any other JSON type as empty. Some verticals
/// return structured values (e.g. thumbnail objects) where others return
/// plain strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned).unwrap_or_default())
}

impl From<RawResult> for SearchResult {
    fn from(raw: RawResult) -> Self {
        SearchResult {
            title: raw.title,
            link: raw.link,
            snippet: raw.snippet,
            thumbnail: raw.thumbnail,
        }
    }
}
