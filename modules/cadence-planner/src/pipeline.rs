//! The run orchestrator: three chained generation stages, topic extraction,
//! then per-topic resource gathering.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cadence_common::{CalendarOutcome, ContentCalendar, PlanRequest};
use openrouter_client::{GenerationError, DEFAULT_TEMPERATURE};
use tracing::{error, info};

use crate::prompts;
use crate::resources::ResourceAggregator;
use crate::topics;
use crate::traits::ContentGenerator;

/// Pause between generation stages. Rate-limit courtesy to the backend, not
/// correctness-critical ordering.
const STAGE_PACING: Duration = Duration::from_secs(1);
/// Pause after each topic's resource batch, keeping the aggregate search
/// rate within the backend's limits.
const TOPIC_PACING: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Researching,
    Strategizing,
    Briefing,
    GatheringResources,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Researching => "researching",
            Stage::Strategizing => "strategizing",
            Stage::Briefing => "briefing",
            Stage::GatheringResources => "gathering_resources",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pipeline run at a time per process; the orchestrator exclusively owns
/// the result it is building. Generation failures abort the run; resource
/// gathering degrades instead (see `ResourceAggregator`).
pub struct Pipeline {
    generator: Arc<dyn ContentGenerator>,
    aggregator: ResourceAggregator,
    stage_pacing: Duration,
    topic_pacing: Duration,
}

impl Pipeline {
    pub fn new(generator: Arc<dyn ContentGenerator>, aggregator: ResourceAggregator) -> Self {
        Self {
            generator,
            aggregator,
            stage_pacing: STAGE_PACING,
            topic_pacing: TOPIC_PACING,
        }
    }

    /// Override the pacing delays. Tests run with zero pacing.
    pub fn with_pacing(mut self, stage: Duration, topic: Duration) -> Self {
        self.stage_pacing = stage;
        self.topic_pacing = topic;
        self
    }

    /// Execute one full run. Always returns a well-formed outcome: the
    /// success shape, or `{error}` carrying the failing stage's message.
    pub async fn run(&self, request: &PlanRequest) -> CalendarOutcome {
        info!(stage = %Stage::Idle, "starting content plan run");
        match self.run_inner(request).await {
            Ok(calendar) => {
                info!(stage = %Stage::Done, execution_secs = calendar.execution_time, "content plan complete");
                CalendarOutcome::Completed(calendar)
            }
            Err(e) => {
                error!(stage = %Stage::Failed, error = %e, "content plan run failed");
                CalendarOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn run_inner(&self, request: &PlanRequest) -> Result<ContentCalendar, GenerationError> {
        let started = Instant::now();

        info!(stage = %Stage::Researching, industry = %request.industry, "researching trends");
        let trends = self
            .generator
            .complete(&prompts::research_prompt(request), DEFAULT_TEMPERATURE)
            .await?;
        tokio::time::sleep(self.stage_pacing).await;

        info!(stage = %Stage::Strategizing, "building 7-day strategy");
        let strategy = self
            .generator
            .complete(
                &prompts::strategy_prompt(request, &trends),
                DEFAULT_TEMPERATURE,
            )
            .await?;
        tokio::time::sleep(self.stage_pacing).await;

        info!(stage = %Stage::Briefing, "writing content briefs");
        let briefs = self
            .generator
            .complete(&prompts::briefs_prompt(&strategy), DEFAULT_TEMPERATURE)
            .await?;
        tokio::time::sleep(self.stage_pacing).await;

        let topic_list = topics::extract_topics(&strategy);
        info!(
            stage = %Stage::GatheringResources,
            topics = topic_list.len(),
            "gathering resources per topic"
        );

        let mut resources = BTreeMap::new();
        for topic in &topic_list {
            let bundle = self.aggregator.gather(topic).await;
            resources.insert(topic.clone(), bundle);
            tokio::time::sleep(self.topic_pacing).await;
        }

        Ok(ContentCalendar {
            trends,
            strategy,
            briefs,
            resources,
            execution_time: started.elapsed().as_secs_f64(),
        })
    }
}
