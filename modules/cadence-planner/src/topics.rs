//! Topic extraction from the day-by-day strategy text.

/// Marker that opens a calendar-day line.
const DAY_MARKER: &str = "Day";

/// Extract the ordered topic list from strategy text shaped as
/// `Day N: <topic> - <type> - <rationale>`.
///
/// Lines not starting with the marker are ignored; malformed day lines
/// (missing colon or hyphen) are skipped. Topics are not deduplicated.
///
/// Known limitation, kept for compatibility with existing strategy output:
/// the topic segment ends at the first hyphen, so a topic that itself
/// contains one (e.g. "work-life balance") is truncated.
pub fn extract_topics(strategy: &str) -> Vec<String> {
    strategy
        .lines()
        .filter(|line| line.starts_with(DAY_MARKER))
        .filter_map(topic_from_day_line)
        .collect()
}

fn topic_from_day_line(line: &str) -> Option<String> {
    let (_, remainder) = line.split_once(':')?;
    let (topic, _) = remainder.split_once('-')?;
    let topic = topic.trim();
    if topic.is_empty() {
        return None;
    }
    Some(topic.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
Here is your 7-day calendar:
Day 1: Morning Desk Stretches - Educational - Easy entry point
Day 2: Protein Myths - Educational - High search volume
Day 3: Client Transformations - Promotional - Social proof
Day 4: 15-Minute Lunch Workouts - Educational - Fits busy schedules
Day 5: Trainer Q&A - Engagement - Community building
Day 6: Meal Prep Basics - Educational - Weekend planning
Day 7: Weekly Challenge Recap - Promotional - Closes the loop";

    #[test]
    fn extracts_seven_topics_in_day_order() {
        let topics = extract_topics(WELL_FORMED);
        assert_eq!(
            topics,
            vec![
                "Morning Desk Stretches",
                "Protein Myths",
                "Client Transformations",
                "15",
                "Trainer Q&A",
                "Meal Prep Basics",
                "Weekly Challenge Recap",
            ]
        );
    }

    #[test]
    fn seven_clean_topics_when_no_hyphens_inside() {
        let strategy = (1..=7)
            .map(|day| format!("Day {day}:  Topic {day}  - Educational - Reason {day}"))
            .collect::<Vec<_>>()
            .join("\n");
        let topics = extract_topics(&strategy);
        assert_eq!(topics.len(), 7);
        for (i, topic) in topics.iter().enumerate() {
            assert_eq!(topic, &format!("Topic {}", i + 1));
        }
    }

    #[test]
    fn line_missing_colon_is_skipped_without_error() {
        let strategy = "\
Day 1: First Topic - Educational - Reason
Day 2 has no colon at all
Day 3: Third Topic - Promotional - Reason";
        let topics = extract_topics(strategy);
        assert_eq!(topics, vec!["First Topic", "Third Topic"]);
    }

    #[test]
    fn line_missing_hyphen_is_skipped_without_error() {
        let strategy = "\
Day 1: First Topic - Educational - Reason
Day 2: no hyphen on this line
Day 3: Third Topic - Promotional - Reason";
        let topics = extract_topics(strategy);
        assert_eq!(topics, vec!["First Topic", "Third Topic"]);
    }

    #[test]
    fn non_day_lines_are_ignored() {
        let strategy = "\
Intro paragraph about the plan.
Day 1: Topic One - Educational - Reason
Monday: not a day line
Day 2: Topic Two - Promotional - Reason";
        let topics = extract_topics(strategy);
        assert_eq!(topics, vec!["Topic One", "Topic Two"]);
    }

    #[test]
    fn duplicate_topics_are_preserved() {
        let strategy = "\
Day 1: Repeat - Educational - First
Day 2: Repeat - Promotional - Second";
        let topics = extract_topics(strategy);
        assert_eq!(topics, vec!["Repeat", "Repeat"]);
    }

    // Compatibility behavior, not a bug to fix: the first hyphen wins even
    // when it is inside the topic itself.
    #[test]
    fn hyphenated_topic_is_truncated_at_first_hyphen() {
        let topics = extract_topics("Day 1: Work-life balance tips - Educational - Relatable");
        assert_eq!(topics, vec!["Work"]);
    }

    #[test]
    fn empty_topic_segment_is_skipped() {
        let topics = extract_topics("Day 1: - Educational - Reason");
        assert!(topics.is_empty());
    }
}
