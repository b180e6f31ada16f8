//! Run persistence: one JSON document per run, named by timestamp.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use cadence_common::{CalendarOutcome, PersistedRun, PlanRequest};

/// Serialize the run to `content_calendar_<YYYYMMDD_HHMMSS>.json` under
/// `dir`. Second-resolution naming avoids collision at normal usage cadence;
/// no atomic-write guarantee.
pub fn save_run(
    dir: &Path,
    request: &PlanRequest,
    outcome: &CalendarOutcome,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("content_calendar_{timestamp}.json"));

    let run = PersistedRun {
        industry: request.industry.clone(),
        target_audience: request.target_audience.clone(),
        content_goals: request.content_goals.clone(),
        timestamp,
        content_calendar: outcome.clone(),
    };

    let json = serde_json::to_string_pretty(&run).context("Failed to serialize run")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "run saved");
    Ok(path)
}

pub fn load_run(path: &Path) -> Result<PersistedRun> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse persisted run")
}
