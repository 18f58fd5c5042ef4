//! Route definitions for the merge proxy (read-only PokéAPI views).

use axum::routing::get;
use axum::Router;

use crate::handlers::{items, moves, pokemon};
use crate::state::AppState;

/// Pokémon proxy routes mounted at `/pokemon`.
///
/// ```text
/// GET /species/{key}   -> get_species
/// GET /{key}           -> get_pokemon
/// ```
pub fn pokemon_router() -> Router<AppState> {
    Router::new()
        .route("/species/{key}", get(pokemon::get_species))
        .route("/{key}", get(pokemon::get_pokemon))
}

/// Item proxy routes mounted at `/item`.
///
/// ```text
/// GET /          -> list_items
/// GET /{key}     -> get_item
/// ```
pub fn item_router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items))
        .route("/{key}", get(items::get_item))
}

/// Move proxy routes mounted at `/move`.
///
/// ```text
/// GET /{name}    -> get_move
/// ```
pub fn move_router() -> Router<AppState> {
    Router::new().route("/{name}", get(moves::get_move))
}
