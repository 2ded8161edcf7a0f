//! Wire types for the PokeAPI list endpoint.

use serde::Deserialize;

use crate::models::Pokemon;

/// Envelope of `GET /pokemon?limit=N`. Only `results` matters here;
/// the count and pagination links are ignored. Each result entry also
/// carries a `url` field the catalog does not use.
#[derive(Debug, Deserialize)]
pub struct PokemonListResponse {
    pub results: Vec<Pokemon>,
}
