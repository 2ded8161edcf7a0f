use std::sync::Arc;

use tracing::info;

use pokesearch::api::{create_pokemon_router, AppState};
use pokesearch::cache::SearchCache;
use pokesearch::pokeapi::{PokeApiClient, POKEAPI_BASE};
use pokesearch::services::PokemonService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "pokesearch=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| POKEAPI_BASE.to_string());
    info!("Using catalog provider at {}", base_url);

    let provider = Arc::new(PokeApiClient::new(base_url)?);
    let cache = Arc::new(SearchCache::new());
    let service = Arc::new(PokemonService::new(provider, cache));

    let app = create_pokemon_router(AppState { service });

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
