//! Route definitions for minigame scores and saved Pokédoku games.
//!
//! All three score routers share the same shape:
//!
//! ```text
//! POST   /                 -> create_score
//! GET    /                 -> list_scores
//! GET    /leaderboard      -> leaderboard
//! GET    /player/{name}    -> scores_by_player
//! DELETE /{id}             -> delete_score
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{berry_scores, pokedoku, quiz_scores};
use crate::state::AppState;

/// Quiz score routes mounted at `/quiz-scores`.
pub fn quiz_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(quiz_scores::create_score).get(quiz_scores::list_scores),
        )
        .route("/leaderboard", get(quiz_scores::leaderboard))
        .route("/player/{name}", get(quiz_scores::scores_by_player))
        .route("/{id}", delete(quiz_scores::delete_score))
}

/// Berry game score routes mounted at `/berry-scores`.
pub fn berry_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(berry_scores::create_score).get(berry_scores::list_scores),
        )
        .route("/leaderboard", get(berry_scores::leaderboard))
        .route("/player/{name}", get(berry_scores::scores_by_player))
        .route("/{id}", delete(berry_scores::delete_score))
}

/// Pokédoku score routes mounted at `/pokedoku-scores`.
pub fn pokedoku_score_router() -> Router<AppState> {
    Router::new()
        .route("/", post(pokedoku::create_score).get(pokedoku::list_scores))
        .route("/leaderboard", get(pokedoku::leaderboard))
        .route("/player/{name}", get(pokedoku::scores_by_player))
        .route("/{id}", delete(pokedoku::delete_score))
}

/// Saved Pokédoku game routes mounted at `/pokedoku-games`.
///
/// ```text
/// POST /     -> save_game
/// GET  /     -> list_games
/// ```
pub fn pokedoku_game_router() -> Router<AppState> {
    Router::new().route("/", post(pokedoku::save_game).get(pokedoku::list_games))
}
