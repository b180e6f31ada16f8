//! Terminal summary of a completed run.

use std::fmt;

use cadence_common::ContentCalendar;

/// Aggregate counts from a run.
#[derive(Debug, Default)]
pub struct PlanStats {
    pub topics: u32,
    pub research_links: u32,
    pub videos: u32,
    pub tools: u32,
    pub stats: u32,
    pub execution_secs: f64,
}

impl PlanStats {
    pub fn from_calendar(calendar: &ContentCalendar) -> Self {
        let mut stats = Self {
            topics: calendar.resources.len() as u32,
            execution_secs: calendar.execution_time,
            ..Default::default()
        };
        for bundle in calendar.resources.values() {
            stats.research_links += bundle.research.len() as u32;
            stats.videos += bundle.videos.len() as u32;
            stats.tools += bundle.tools.len() as u32;
            stats.stats += bundle.stats.len() as u32;
        }
        stats
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Content Plan Complete ===")?;
        writeln!(f, "Topics:          {}", self.topics)?;
        writeln!(f, "Research links:  {}", self.research_links)?;
        writeln!(f, "Videos:          {}", self.videos)?;
        writeln!(f, "Tools:           {}", self.tools)?;
        writeln!(f, "Statistics:      {}", self.stats)?;
        writeln!(f, "Execution time:  {:.2}s", self.execution_secs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_common::{ResourceBundle, SearchResult};
    use std::collections::BTreeMap;

    #[test]
    fn counts_resources_across_topics() {
        let hit = SearchResult {
            title: "t".to_string(),
            ..Default::default()
        };
        let mut resources = BTreeMap::new();
        resources.insert(
            "A".to_string(),
            ResourceBundle {
                research: vec![hit.clone(), hit.clone()],
                videos: vec![hit.clone()],
                ..Default::default()
            },
        );
        resources.insert(
            "B".to_string(),
            ResourceBundle {
                tools: vec![hit.clone()],
                stats: vec![hit.clone(), hit.clone(), hit],
                ..Default::default()
            },
        );
        let calendar = ContentCalendar {
            trends: String::new(),
            strategy: String::new(),
            briefs: String::new(),
            resources,
            execution_time: 3.5,
        };

        let stats = PlanStats::from_calendar(&calendar);
        assert_eq!(stats.topics, 2);
        assert_eq!(stats.research_links, 2);
        assert_eq!(stats.videos, 1);
        assert_eq!(stats.tools, 1);
        assert_eq!(stats.stats, 3);

        let rendered = stats.to_string();
        assert!(rendered.contains("Topics:          2"));
        assert!(rendered.contains("Execution time:  3.50s"));
    }
}
