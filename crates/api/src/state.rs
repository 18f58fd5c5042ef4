use std::sync::Arc;

use pokecompanion_pokeapi::PokeApiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). Constructed once at startup and injected everywhere; there is
/// no global storage handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pokecompanion_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream PokéAPI client.
    pub pokeapi: Arc<PokeApiClient>,
}
