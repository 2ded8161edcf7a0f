//! Pokemon Query Service
//!
//! Orchestrates the search engine, the result cache and the catalog
//! provider into the two public operations: plain search and
//! highlighted search.
//!
//! ## Flow
//!
//! 1. Resolve the sort token (defaulting to alphabetical).
//! 2. Empty query: fetch + sort the whole catalog, bypassing the cache.
//! 3. Cache hit: return the stored list, no re-fetch or re-sort.
//! 4. Cache miss: fetch, filter, sort (and highlight), store, return.
//!
//! Provider failures propagate to the caller; nothing is cached on that
//! path. Concurrent identical requests may race into duplicate upstream
//! fetches; the last write wins with identical content.

use std::sync::Arc;

use tracing::info;

use crate::cache::SearchCache;
use crate::error::ServiceError;
use crate::models::{HighlightedPokemon, Pokemon, SortMode};
use crate::pokeapi::CatalogProvider;
use crate::search;

pub struct PokemonService {
    provider: Arc<dyn CatalogProvider>,
    cache: Arc<SearchCache>,
}

impl PokemonService {
    pub fn new(provider: Arc<dyn CatalogProvider>, cache: Arc<SearchCache>) -> Self {
        Self { provider, cache }
    }

    /// Search the catalog for names containing `query`, ordered per
    /// `sort_token`. An absent or empty query returns the whole catalog,
    /// sorted, without reading or writing the cache.
    pub async fn search(
        &self,
        query: Option<&str>,
        sort_token: Option<&str>,
    ) -> Result<Vec<Pokemon>, ServiceError> {
        let sort = SortMode::from_token(sort_token);

        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => {
                let catalog = self.provider.fetch_all().await?;
                return Ok(search::sort(catalog, sort));
            }
        };

        if let Some(hit) = self.cache.get_plain(query, sort).await {
            info!(query, count = hit.len(), "search served from cache");
            return Ok(hit);
        }

        let catalog = self.provider.fetch_all().await?;
        let results = search::sort(search::filter(&catalog, query), sort);
        info!(query, count = results.len(), "search served from upstream catalog");
        self.cache.put_plain(query, sort, results.clone()).await;

        Ok(results)
    }

    /// Like [`Self::search`], returning each name together with a copy
    /// annotated with highlight markers around the query matches. The
    /// empty-query path leaves the annotation empty. Uses its own cache
    /// table; a plain-search hit never satisfies a highlighted search.
    pub async fn search_highlighted(
        &self,
        query: Option<&str>,
        sort_token: Option<&str>,
    ) -> Result<Vec<HighlightedPokemon>, ServiceError> {
        let sort = SortMode::from_token(sort_token);

        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => {
                let catalog = self.provider.fetch_all().await?;
                return Ok(search::sort(catalog, sort)
                    .into_iter()
                    .map(|pokemon| HighlightedPokemon {
                        name: pokemon.name,
                        highlight: String::new(),
                    })
                    .collect());
            }
        };

        if let Some(hit) = self.cache.get_highlighted(query, sort).await {
            info!(query, count = hit.len(), "highlighted search served from cache");
            return Ok(hit);
        }

        let catalog = self.provider.fetch_all().await?;
        let results: Vec<HighlightedPokemon> =
            search::sort(search::filter(&catalog, query), sort)
                .into_iter()
                .map(|pokemon| {
                    let highlight = search::highlight(&pokemon.name, query);
                    HighlightedPokemon {
                        name: pokemon.name,
                        highlight,
                    }
                })
                .collect();
        info!(
            query,
            count = results.len(),
            "highlighted search served from upstream catalog"
        );
        self.cache.put_highlighted(query, sort, results.clone()).await;

        Ok(results)
    }
}
