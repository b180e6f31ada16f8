//! Core data model shared across the pipeline and its adapters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three user inputs that seed a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub industry: String,
    pub target_audience: String,
    pub content_goals: String,
}

/// A normalized web-search record. Fields are best-effort extractions from
/// heterogeneous backend shapes; absent fields are empty strings so
/// downstream formatting never sees a null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// A normalized image-search record. Serialized with the backend's casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    #[serde(rename = "previewURL", default)]
    pub preview_url: String,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub tags: String,
}

/// Supporting material gathered for one topic. All four lists are always
/// present; a failed sub-search yields an empty list, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub research: Vec<SearchResult>,
    pub videos: Vec<SearchResult>,
    pub tools: Vec<SearchResult>,
    pub stats: Vec<SearchResult>,
}

impl ResourceBundle {
    pub fn is_empty(&self) -> bool {
        self.research.is_empty()
            && self.videos.is_empty()
            && self.tools.is_empty()
            && self.stats.is_empty()
    }

    pub fn total(&self) -> usize {
        self.research.len() + self.videos.len() + self.tools.len() + self.stats.len()
    }
}

/// The assembled result of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCalendar {
    pub trends: String,
    pub strategy: String,
    pub briefs: String,
    pub resources: BTreeMap<String, ResourceBundle>,
    pub execution_time: f64,
}

/// A run produces exactly one of these shapes: the success shape carries no
/// `error` key, the failure shape is exactly `{"error": ...}`. Untagged so
/// callers (and persisted documents) discriminate on the `error` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarOutcome {
    Completed(ContentCalendar),
    Failed { error: String },
}

impl CalendarOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, CalendarOutcome::Failed { .. })
    }
}

/// One persisted run: the original inputs, a second-resolution timestamp,
/// and the outcome. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRun {
    pub industry: String,
    pub target_audience: String,
    pub content_goals: String,
    pub timestamp: String,
    pub content_calendar: CalendarOutcome,
}
