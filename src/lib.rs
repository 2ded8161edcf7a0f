//! pokesearch - cached substring search over the PokeAPI pokemon catalog.
//!
//! The core is a fetch -> filter -> sort -> highlight pipeline with a
//! per-(query, sort) result cache in front of the upstream fetch. The
//! HTTP layer in [`api`] and the PokeAPI client in [`pokeapi`] are thin
//! plumbing around [`services::PokemonService`].

pub mod api;
pub mod cache;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod search;
pub mod services;
