use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cadence_common::{CalendarOutcome, Config, PlanRequest};
use cadence_planner::calendar::day_events;
use cadence_planner::persist::save_run;
use cadence_planner::progress::{ProgressTicker, DEFAULT_TICK};
use cadence_planner::report::PlanStats;
use cadence_planner::{ImageSearcher, Pipeline, ResourceAggregator};
use openrouter_client::OpenRouterClient;
use pixabay_client::PixabayClient;
use serpapi_client::SerpApiClient;

/// Generate a 7-day content plan with researched supporting resources.
#[derive(Debug, Parser)]
#[command(name = "cadence", version)]
struct Args {
    /// Industry or niche, e.g. "Fitness"
    #[arg(long)]
    industry: String,

    /// Target audience, key demographics and interests
    #[arg(long)]
    audience: String,

    /// Content goals, e.g. "increase brand awareness"
    #[arg(long)]
    goals: String,

    /// Directory for the persisted run (defaults to OUTPUT_DIR or ".")
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Override the generation model
    #[arg(long)]
    model: Option<String>,

    /// Skip the per-topic image lookup in the report
    #[arg(long)]
    no_images: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => bail!("{e}. Please check your .env file."),
    };
    config.log_redacted();

    let mut generator = OpenRouterClient::new(&config.openrouter_api_key)
        .with_site_url(&config.site_url)
        .with_app_name(&config.site_name);
    if let Some(ref model) = args.model {
        generator = generator.with_model(model);
    }
    let searcher = SerpApiClient::new(&config.serpapi_key);
    let images = PixabayClient::new(
        config
            .pixabay_api_key
            .as_deref()
            .unwrap_or(pixabay_client::DEFAULT_API_KEY),
    );

    let request = PlanRequest {
        industry: args.industry,
        target_audience: args.audience,
        content_goals: args.goals,
    };

    let pipeline = Pipeline::new(
        Arc::new(generator),
        ResourceAggregator::new(Arc::new(searcher)),
    );

    let ticker = ProgressTicker::start(DEFAULT_TICK);
    let outcome = pipeline.run(&request).await;
    drop(ticker);

    match outcome {
        CalendarOutcome::Completed(ref calendar) => {
            let output_dir = args
                .output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output_dir));
            let path = save_run(&output_dir, &request, &outcome)?;

            let stats = PlanStats::from_calendar(calendar);
            println!("{stats}");

            let schedule = day_events(&calendar.strategy);
            if !schedule.is_empty() {
                println!("Schedule:");
                for event in &schedule {
                    println!("  Day {}: {} ({})", event.day, event.topic, event.content_type);
                }
            }
            println!("\nSaved to {}", path.display());

            if !args.no_images {
                show_topic_images(&images, calendar).await;
            }
            Ok(())
        }
        CalendarOutcome::Failed { error } => bail!(error),
    }
}

/// Best-effort image suggestions per topic. Failures only cost the listing.
async fn show_topic_images(images: &dyn ImageSearcher, calendar: &cadence_common::ContentCalendar) {
    for topic in calendar.resources.keys() {
        match images.search_images(topic, pixabay_client::DEFAULT_COUNT).await {
            Ok(hits) if !hits.is_empty() => {
                println!("\nImages for {topic}:");
                for image in hits {
                    println!("  {} ({})", image.preview_url, image.page_url);
                }
            }
            Ok(_) => info!(topic = %topic, "no images found"),
            Err(e) => info!(topic = %topic, error = %e, "image lookup failed"),
        }
    }
}
