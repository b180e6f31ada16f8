use cadence_common::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to parse search response: {0}")]
    Parse(String),
}
