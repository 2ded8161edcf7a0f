//! REST API module.
//!
//! Thin transport boundary over [`crate::services::PokemonService`]:
//! decodes query parameters, encodes result lists, maps errors to
//! status codes.

pub mod pokemon_routes;

pub use pokemon_routes::{create_pokemon_router, AppState};
