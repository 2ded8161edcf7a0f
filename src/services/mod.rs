//! Service layer orchestrating the search pipeline.

pub mod pokemon_service;

pub use pokemon_service::PokemonService;
