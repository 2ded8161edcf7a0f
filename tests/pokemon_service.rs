//! Service-level tests with a scripted catalog provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use pokesearch::cache::SearchCache;
use pokesearch::error::ServiceError;
use pokesearch::models::{Pokemon, SortMode};
use pokesearch::pokeapi::{CatalogProvider, ProviderError};
use pokesearch::services::PokemonService;

/// Catalog provider backed by a fixed name list, counting fetches. Set
/// `fail` to make every fetch return a provider error.
struct ScriptedProvider {
    names: Vec<&'static str>,
    fail: bool,
    fetch_calls: AtomicUsize,
}

impl ScriptedProvider {
    fn with_names(names: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            names: names.to_vec(),
            fail: false,
            fetch_calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            names: vec![],
            fail: true,
            fetch_calls: AtomicUsize::new(0),
        })
    }

    fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for ScriptedProvider {
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, ProviderError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(self
            .names
            .iter()
            .map(|name| Pokemon {
                name: name.to_string(),
            })
            .collect())
    }
}

fn service_over(provider: Arc<ScriptedProvider>) -> (PokemonService, Arc<SearchCache>) {
    let cache = Arc::new(SearchCache::new());
    (
        PokemonService::new(provider, cache.clone()),
        cache,
    )
}

fn names(pokemons: &[Pokemon]) -> Vec<&str> {
    pokemons.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_search_filters_and_sorts_alphabetically() {
    let provider =
        ScriptedProvider::with_names(&["monferno", "hitmonlee", "pidgey", "hitmonchan", "hitmontop"]);
    let (service, _) = service_over(provider);

    let results = service.search(Some("mon"), Some("Alphabetical")).await.unwrap();

    assert_eq!(
        names(&results),
        vec!["hitmonchan", "hitmonlee", "hitmontop", "monferno"]
    );
    assert!(results.iter().all(|p| p.name.contains("mon")));
}

#[tokio::test]
async fn test_second_search_is_served_from_cache() {
    let provider = ScriptedProvider::with_names(&["pidgetto", "pidgeot", "pidge", "mew"]);
    let (service, _) = service_over(provider.clone());

    let first = service.search(Some("pidge"), Some("length")).await.unwrap();
    let second = service.search(Some("pidge"), Some("length")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(names(&first), vec!["pidge", "pidgeot", "pidgetto"]);
    assert_eq!(provider.fetch_count(), 1);
}

#[tokio::test]
async fn test_empty_query_returns_whole_catalog_and_bypasses_cache() {
    let provider = ScriptedProvider::with_names(&["pidgey", "mew", "abra"]);
    let (service, cache) = service_over(provider.clone());

    let results = service.search(Some(""), None).await.unwrap();
    assert_eq!(names(&results), vec!["abra", "mew", "pidgey"]);
    assert!(cache.get_plain("", SortMode::Alphabetical).await.is_none());

    // Never cached: the second empty-query call fetches again.
    service.search(None, None).await.unwrap();
    assert_eq!(provider.fetch_count(), 2);
}

#[tokio::test]
async fn test_unrecognized_sort_token_defaults_to_alphabetical() {
    let provider = ScriptedProvider::with_names(&["mew", "abra"]);
    let (service, _) = service_over(provider);

    let results = service.search(None, Some("by-weight")).await.unwrap();
    assert_eq!(names(&results), vec!["abra", "mew"]);
}

#[tokio::test]
async fn test_queries_differing_by_case_fill_distinct_entries() {
    let provider = ScriptedProvider::with_names(&["hitmonchan", "monferno"]);
    let (service, _) = service_over(provider.clone());

    let lower = service.search(Some("mon"), None).await.unwrap();
    let upper = service.search(Some("MON"), None).await.unwrap();

    // Identical content, but the raw-query key means two misses.
    assert_eq!(lower, upper);
    assert_eq!(provider.fetch_count(), 2);
}

#[tokio::test]
async fn test_highlighted_search_marks_matches_in_length_order() {
    let provider = ScriptedProvider::with_names(&[
        "dragapult",
        "dragonair",
        "pidgey",
        "regidrago",
        "dragonite",
        "dragalge",
    ]);
    let (service, _) = service_over(provider);

    let results = service
        .search_highlighted(Some("drag"), Some("length"))
        .await
        .unwrap();

    let marked: Vec<(&str, &str)> = results
        .iter()
        .map(|p| (p.name.as_str(), p.highlight.as_str()))
        .collect();
    assert_eq!(
        marked,
        vec![
            ("dragalge", "<pre>drag</pre>alge"),
            ("dragapult", "<pre>drag</pre>apult"),
            ("dragonair", "<pre>drag</pre>onair"),
            ("regidrago", "regi<pre>drag</pre>o"),
            ("dragonite", "<pre>drag</pre>onite"),
        ]
    );
}

#[tokio::test]
async fn test_highlighted_search_hits_its_own_cache() {
    let provider = ScriptedProvider::with_names(&["dragalge", "regidrago"]);
    let (service, _) = service_over(provider.clone());

    let first = service.search_highlighted(Some("drag"), None).await.unwrap();
    let second = service.search_highlighted(Some("drag"), None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.fetch_count(), 1);
}

#[tokio::test]
async fn test_plain_and_highlighted_caches_are_independent() {
    let provider = ScriptedProvider::with_names(&["dragalge", "regidrago"]);
    let (service, _) = service_over(provider.clone());

    service.search(Some("drag"), None).await.unwrap();
    service.search_highlighted(Some("drag"), None).await.unwrap();

    // The plain hit does not satisfy the highlighted lookup.
    assert_eq!(provider.fetch_count(), 2);
}

#[tokio::test]
async fn test_empty_query_highlighted_leaves_annotation_empty() {
    let provider = ScriptedProvider::with_names(&["mew", "abra"]);
    let (service, _) = service_over(provider);

    let results = service.search_highlighted(None, None).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|p| p.highlight.is_empty()));
    assert_eq!(results[0].name, "abra");
}

#[tokio::test]
async fn test_provider_failure_propagates_and_caches_nothing() {
    let provider = ScriptedProvider::failing();
    let (service, cache) = service_over(provider);

    let err = service.search(Some("drag"), Some("length")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Provider(_)));

    assert!(cache.get_plain("drag", SortMode::Length).await.is_none());
    assert!(cache
        .get_highlighted("drag", SortMode::Length)
        .await
        .is_none());
}
