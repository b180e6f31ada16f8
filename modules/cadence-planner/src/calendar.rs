//! Calendar-collaborator boundary: day-event descriptors parsed from the
//! strategy text, the sink that turns them into external calendar events,
//! and the credential cache the sink is given. Event creation itself (OAuth
//! flows, provider APIs) lives outside this system.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One calendar day's event descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvent {
    pub day: u32,
    pub topic: String,
    pub content_type: String,
    pub rationale: String,
}

/// Parse day-event descriptors from strategy text shaped as
/// `Day N: <topic> - <type> - <rationale>`. Missing type defaults to
/// "Content", missing rationale to empty; unparseable lines are skipped.
pub fn day_events(strategy: &str) -> Vec<DayEvent> {
    strategy
        .lines()
        .filter(|line| line.starts_with("Day"))
        .filter_map(|line| match parse_day_line(line) {
            Some(event) => Some(event),
            None => {
                warn!(line, "skipping unparseable day line");
                None
            }
        })
        .collect()
}

fn parse_day_line(line: &str) -> Option<DayEvent> {
    let (label, remainder) = line.split_once(':')?;
    let day: u32 = label.split_whitespace().nth(1)?.parse().ok()?;

    let mut segments = remainder.splitn(3, '-');
    let topic = segments.next()?.trim();
    if topic.is_empty() {
        return None;
    }
    let content_type = segments
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Content");
    let rationale = segments.next().map(str::trim).unwrap_or("");

    Some(DayEvent {
        day,
        topic: topic.to_string(),
        content_type: content_type.to_string(),
        rationale: rationale.to_string(),
    })
}

/// Per-event submission result: a shareable link, or the provider's error.
#[derive(Debug, Clone)]
pub struct EventOutcome {
    pub day: u32,
    pub result: std::result::Result<String, String>,
}

/// The calendar integration seam. Implementations create one event per day
/// (one hour, UTC) and report per-event success/failure.
#[async_trait]
pub trait CalendarSink: Send + Sync {
    async fn submit(&self, events: &[DayEvent]) -> Vec<EventOutcome>;
}

/// A cached OAuth credential with expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl StoredCredential {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Explicit credential cache injected into the calendar collaborator,
/// instead of ambient file-system state.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<StoredCredential>>;
    async fn persist(&self, credential: &StoredCredential) -> Result<()>;
    async fn invalidate(&self) -> Result<()>;
    async fn refresh(&self, credential: &StoredCredential) -> Result<StoredCredential>;
}

/// JSON-file credential cache. It can load, persist, and invalidate; minting
/// a fresh token requires the provider's authorization flow, so `refresh`
/// fails here and belongs to the collaborator that owns that flow.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<StoredCredential>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let credential = serde_json::from_str(&json).context("Failed to parse credential")?;
        Ok(Some(credential))
    }

    async fn persist(&self, credential: &StoredCredential) -> Result<()> {
        let json = serde_json::to_string(credential).context("Failed to serialize credential")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    async fn invalidate(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }

    async fn refresh(&self, _credential: &StoredCredential) -> Result<StoredCredential> {
        bail!("token refresh requires the calendar provider's authorization flow")
    }
}
