use cadence_common::TransportError;
use thiserror::Error;

/// Failures from the generation backend. Callers branch on the kind:
/// connectivity problems get targeted user messages, `UnexpectedShape`
/// carries the raw response for diagnosis.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network connection error. Please check your internet connection and try again.")]
    Network(String),

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Error making request: {0}")]
    Request(String),

    #[error("Unexpected API response format: {raw}")]
    UnexpectedShape { raw: String },
}

impl From<TransportError> for GenerationError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connect(msg) => GenerationError::Network(msg),
            TransportError::Timeout => GenerationError::Timeout,
            other => GenerationError::Request(other.to_string()),
        }
    }
}
