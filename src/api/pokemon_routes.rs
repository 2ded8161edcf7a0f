//! HTTP routes for pokemon search.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::models::HighlightedPokemon;
use crate::services::PokemonService;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PokemonService>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonQuery {
    pub query: Option<String>,
    pub sort: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PokemonResponse {
    pub results: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PokemonHighlightResponse {
    pub results: Vec<HighlightedPokemon>,
}

pub fn create_pokemon_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/pokemons", get(get_pokemons))
        .route("/pokemons/highlight", get(get_pokemons_highlight))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn get_pokemons(
    Query(params): Query<PokemonQuery>,
    State(state): State<AppState>,
) -> Result<Json<PokemonResponse>, StatusCode> {
    info!(query = ?params.query, sort = ?params.sort, "searching pokemons by name");

    match state
        .service
        .search(params.query.as_deref(), params.sort.as_deref())
        .await
    {
        Ok(pokemons) => Ok(Json(PokemonResponse {
            results: pokemons.into_iter().map(|pokemon| pokemon.name).collect(),
        })),
        Err(e) => {
            warn!("Failed to search pokemons: {:?}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

async fn get_pokemons_highlight(
    Query(params): Query<PokemonQuery>,
    State(state): State<AppState>,
) -> Result<Json<PokemonHighlightResponse>, StatusCode> {
    info!(
        query = ?params.query,
        sort = ?params.sort,
        "searching pokemons with highlight by name"
    );

    match state
        .service
        .search_highlighted(params.query.as_deref(), params.sort.as_deref())
        .await
    {
        Ok(pokemons) => Ok(Json(PokemonHighlightResponse { results: pokemons })),
        Err(e) => {
            warn!("Failed to search pokemons with highlight: {:?}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
