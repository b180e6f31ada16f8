use thiserror::Error;

/// Application configuration loaded from environment variables.
/// Validated once at startup; no pipeline run begins without it.
#[derive(Debug, Clone)]
pub struct Config {
    // Generation backend
    pub openrouter_api_key: String,
    pub site_url: String,
    pub site_name: String,

    // Search backend
    pub serpapi_key: String,

    // Image backend (falls back to the public key when unset)
    pub pixabay_api_key: Option<String>,

    // Where persisted runs are written
    pub output_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

const REQUIRED_VARS: [&str; 4] = ["OPENROUTER_API_KEY", "SITE_URL", "SITE_NAME", "SERPAPI_KEY"];

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    /// Reports every missing required variable in one error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|&&var| get(var).map_or(true, |v| v.is_empty()))
            .map(|var| var.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        Ok(Self {
            openrouter_api_key: get("OPENROUTER_API_KEY").unwrap_or_default(),
            site_url: get("SITE_URL").unwrap_or_default(),
            site_name: get("SITE_NAME").unwrap_or_default(),
            serpapi_key: get("SERPAPI_KEY").unwrap_or_default(),
            pixabay_api_key: get("PIXABAY_API_KEY").filter(|v| !v.is_empty()),
            output_dir: get("OUTPUT_DIR").unwrap_or_else(|| ".".to_string()),
        })
    }

    /// Log which keys are present without exposing their values.
    pub fn log_redacted(&self) {
        fn preview(val: &str) -> String {
            let n = val.len().min(5);
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  OPENROUTER_API_KEY: {}", preview(&self.openrouter_api_key));
        tracing::info!("  SERPAPI_KEY: {}", preview(&self.serpapi_key));
        tracing::info!("  SITE_URL: {}", self.site_url);
        tracing::info!("  SITE_NAME: {}", self.site_name);
        tracing::info!(
            "  PIXABAY_API_KEY: {}",
            self.pixabay_api_key
                .as_deref()
                .map_or("<public default>".to_string(), preview)
        );
        tracing::info!("  OUTPUT_DIR: {}", self.output_dir);
    }
}
