//! Process-lifetime memoization of computed search results.
//!
//! Two independent tables keyed by (raw query, resolved sort mode): one
//! for plain results, one for highlighted results. Keys use the raw,
//! non-lowercased query, so queries differing only by case hold distinct
//! entries with identical content; matching itself is case-insensitive.
//! No eviction, no size bound, no TTL.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;

use crate::models::{HighlightedPokemon, Pokemon, SortMode};

type CacheKey = (String, SortMode);

/// Shared result cache, constructed once and injected into the service
/// behind an `Arc`. Whole-table locks keep readers from observing a
/// partially-written entry.
#[derive(Default)]
pub struct SearchCache {
    plain: RwLock<HashMap<CacheKey, Vec<Pokemon>>>,
    highlighted: RwLock<HashMap<CacheKey, Vec<HighlightedPokemon>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a plain result list, overwriting any existing entry.
    pub async fn put_plain(&self, query: &str, sort: SortMode, results: Vec<Pokemon>) {
        info!(query, count = results.len(), "caching search results");
        self.plain
            .write()
            .await
            .insert((query.to_string(), sort), results);
    }

    /// Store a highlighted result list, overwriting any existing entry.
    pub async fn put_highlighted(
        &self,
        query: &str,
        sort: SortMode,
        results: Vec<HighlightedPokemon>,
    ) {
        info!(query, count = results.len(), "caching highlighted search results");
        self.highlighted
            .write()
            .await
            .insert((query.to_string(), sort), results);
    }

    /// Exact-key lookup; `None` is a genuine miss.
    pub async fn get_plain(&self, query: &str, sort: SortMode) -> Option<Vec<Pokemon>> {
        self.plain
            .read()
            .await
            .get(&(query.to_string(), sort))
            .cloned()
    }

    /// Exact-key lookup; `None` is a genuine miss.
    pub async fn get_highlighted(
        &self,
        query: &str,
        sort: SortMode,
    ) -> Option<Vec<HighlightedPokemon>> {
        self.highlighted
            .read()
            .await
            .get(&(query.to_string(), sort))
            .cloned()
    }

    /// Empty both tables. Lifecycle management only (test teardown,
    /// administrative reset); never called on the request path.
    pub async fn clear_all(&self) {
        self.plain.write().await.clear();
        self.highlighted.write().await.clear();
    }
}
