//! Route definitions for favorite Pokémon.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorite routes mounted at `/favorites`.
///
/// ```text
/// POST   /                -> add_favorite
/// GET    /                -> list_favorites
/// GET    /count           -> count_favorites
/// GET    /{pokemon_id}    -> is_favorite
/// DELETE /{pokemon_id}    -> remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/count", get(favorites::count_favorites))
        .route(
            "/{pokemon_id}",
            get(favorites::is_favorite).delete(favorites::remove_favorite),
        )
}
