pub mod client;
pub mod error;
mod extract;
mod types;

pub use client::{OpenRouterClient, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use error::GenerationError;
