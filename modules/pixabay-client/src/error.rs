use cadence_common::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageError>;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to parse image response: {0}")]
    Parse(String),
}
