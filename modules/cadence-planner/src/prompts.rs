//! Prompt builders for the three generation stages. Each later stage embeds
//! the previous stage's full output verbatim.

use cadence_common::PlanRequest;

pub fn research_prompt(request: &PlanRequest) -> String {
    format!(
        "Research current trends in the {industry} industry for {audience}.
Focus on:
1. Top content formats (video, blog, etc.)
2. Trending topics and hashtags
3. Upcoming events in the next 2 weeks
4. 5-7 potential content topics that align with: {goals}

Provide a concise summary (max 500 words).",
        industry = request.industry,
        audience = request.target_audience,
        goals = request.content_goals,
    )
}

pub fn strategy_prompt(request: &PlanRequest, trends: &str) -> String {
    format!(
        "Based on this research: {trends}

Create a simple 7-day content calendar for {audience}.
Include:
1. Mix of content types (educational, promotional, etc.)
2. One main topic per day
3. Brief rationale for each day

Format as Day 1: [Topic] - [Type] - [Brief rationale]",
        audience = request.target_audience,
    )
}

pub fn briefs_prompt(strategy: &str) -> String {
    format!(
        "Based on this calendar: {strategy}

Create brief content outlines for each day.
For each day include:
1. Headline
2. Brief hook
3. 3-5 key points
4. Call-to-action

Keep each day's brief concise and focused."
    )
}
