//! Per-topic resource gathering across the search verticals.

use std::sync::Arc;

use cadence_common::{ResourceBundle, SearchResult};
use serpapi_client::SearchVertical;
use tracing::{info, warn};

use crate::traits::WebSearcher;

/// Fans one topic out to four searches and assembles the bundle. This is the
/// degradation boundary: a failed sub-search becomes an empty list, so every
/// bundle always carries all four lists and no search failure can abort a
/// run. Inter-topic pacing belongs to the orchestrator, not here.
pub struct ResourceAggregator {
    searcher: Arc<dyn WebSearcher>,
}

impl ResourceAggregator {
    pub fn new(searcher: Arc<dyn WebSearcher>) -> Self {
        Self { searcher }
    }

    pub async fn gather(&self, topic: &str) -> ResourceBundle {
        let (research, videos, tools, stats) = tokio::join!(
            self.search(format!("{topic} research papers articles"), SearchVertical::Scholarly),
            self.search(format!("{topic} tutorial guide"), SearchVertical::Video),
            self.search(format!("{topic} tools software applications"), SearchVertical::General),
            self.search(format!("{topic} statistics data facts"), SearchVertical::General),
        );

        let bundle = ResourceBundle {
            research,
            videos,
            tools,
            stats,
        };
        info!(topic, resources = bundle.total(), "resources gathered");
        bundle
    }

    async fn search(&self, query: String, vertical: SearchVertical) -> Vec<SearchResult> {
        match self.searcher.search(&query, vertical).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query = %query, error = %e, "search failed, continuing with empty results");
                Vec::new()
            }
        }
    }
}
