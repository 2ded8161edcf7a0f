//! PokeAPI integration: the upstream catalog provider.

pub mod client;
pub mod types;

pub use client::{CatalogProvider, PokeApiClient, ProviderError, POKEAPI_BASE};
