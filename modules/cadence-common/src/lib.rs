pub mod config;
pub mod http;
pub mod types;

pub use config::{Config, ConfigError};
pub use http::{RetryingClient, TransportError};
pub use types::{
    CalendarOutcome, ContentCalendar, ImageResult, PersistedRun, PlanRequest, ResourceBundle,
    SearchResult,
};
