//! Substring search over the catalog: filtering, sorting and match
//! highlighting. Pure functions, no I/O; orchestration lives in
//! [`crate::services::PokemonService`].

use crate::models::{Pokemon, SortMode};

/// Opening marker wrapped around each query match.
pub const HIGHLIGHT_OPEN: &str = "<pre>";
/// Closing marker wrapped around each query match.
pub const HIGHLIGHT_CLOSE: &str = "</pre>";

/// Find `needle` in `haystack` starting at byte offset `from`, ignoring
/// ASCII case. Byte-window comparison keeps the returned offset on a
/// valid UTF-8 boundary whenever `needle` is valid UTF-8.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let ned = needle.as_bytes();
    if ned.is_empty() || hay.len() < from + ned.len() {
        return None;
    }
    hay[from..]
        .windows(ned.len())
        .position(|window| window.eq_ignore_ascii_case(ned))
        .map(|pos| from + pos)
}

/// Keep every pokemon whose name contains `query` as a contiguous
/// substring, case-insensitively. Each pokemon appears at most once in
/// the output even when the substring occurs multiple times in its name.
/// Callers must not pass an empty query; the empty-query case is
/// "whole catalog, no filter" and is handled before this point.
pub fn filter(catalog: &[Pokemon], query: &str) -> Vec<Pokemon> {
    debug_assert!(!query.is_empty(), "empty query bypasses the filter");
    catalog
        .iter()
        .filter(|pokemon| find_ignore_ascii_case(&pokemon.name, query, 0).is_some())
        .cloned()
        .collect()
}

/// Order `pokemons` according to `mode`. Length mode keeps the relative
/// input order among equal-length names; std's stable sort guarantees it.
pub fn sort(mut pokemons: Vec<Pokemon>, mode: SortMode) -> Vec<Pokemon> {
    match mode {
        SortMode::Alphabetical => pokemons.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMode::Length => pokemons.sort_by_key(|pokemon| pokemon.name.len()),
    }
    pokemons
}

/// Wrap every non-overlapping occurrence of `query` inside `name` with
/// highlight markers, scanning left to right and advancing past each
/// match. Matching ignores ASCII case; the marked text keeps the
/// original casing. An empty query returns `name` unchanged.
pub fn highlight(name: &str, query: &str) -> String {
    if query.is_empty() {
        return name.to_string();
    }

    let mut marked = String::with_capacity(name.len());
    let mut current = 0;

    while let Some(start) = find_ignore_ascii_case(name, query, current) {
        let end = start + query.len();
        marked.push_str(&name[current..start]);
        marked.push_str(HIGHLIGHT_OPEN);
        marked.push_str(&name[start..end]);
        marked.push_str(HIGHLIGHT_CLOSE);
        current = end;
    }
    marked.push_str(&name[current..]);

    marked
}
