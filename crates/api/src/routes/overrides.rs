//! Route definitions for override CRUD, one router per entity kind.
//!
//! The read/delete handlers are generic over the kind; each router pins
//! them to its kind's marker type.

use axum::routing::get;
use axum::Router;

use pokecompanion_db::repositories::{ItemKind, MoveKind, PokemonKind};

use crate::handlers::overrides;
use crate::state::AppState;

/// Pokémon override routes mounted at `/edited-pokemon`.
///
/// ```text
/// GET    /        -> list_overrides
/// POST   /        -> upsert_pokemon
/// GET    /{id}    -> get_override
/// DELETE /{id}    -> delete_override
/// ```
pub fn pokemon_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(overrides::list_overrides::<PokemonKind>).post(overrides::upsert_pokemon),
        )
        .route(
            "/{key}",
            get(overrides::get_override::<PokemonKind>)
                .delete(overrides::delete_override::<PokemonKind>),
        )
}

/// Item override routes mounted at `/edited-items`.
pub fn item_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(overrides::list_overrides::<ItemKind>).post(overrides::upsert_item),
        )
        .route(
            "/{key}",
            get(overrides::get_override::<ItemKind>)
                .delete(overrides::delete_override::<ItemKind>),
        )
}

/// Move override routes mounted at `/edited-moves`. Keys are move names
/// and are normalized before lookup.
pub fn move_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(overrides::list_overrides::<MoveKind>).post(overrides::upsert_move),
        )
        .route(
            "/{key}",
            get(overrides::get_override::<MoveKind>)
                .delete(overrides::delete_override::<MoveKind>),
        )
}
