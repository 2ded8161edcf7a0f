//! Error types surfaced by the query service.

use thiserror::Error;

use crate::pokeapi::ProviderError;

/// Failures a search operation can propagate to its caller. Malformed
/// sort tokens are not errors; they silently default to alphabetical.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("catalog provider fetch failed: {0}")]
    Provider(#[from] ProviderError),
}
