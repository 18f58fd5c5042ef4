pub mod favorites;
pub mod health;
pub mod merged;
pub mod overrides;
pub mod scores;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pokemon/{key}                     merged Pokémon view (GET)
/// /pokemon/species/{key}             merged species view (GET)
/// /item                              item list with edited flags (GET)
/// /item/{key}                        merged item view (GET)
/// /move/{name}                       merged move view (GET)
///
/// /edited-pokemon                    list overrides, upsert (GET, POST)
/// /edited-pokemon/{id}               get, delete override
/// /edited-items                      list overrides, upsert (GET, POST)
/// /edited-items/{id}                 get, delete override
/// /edited-moves                      list overrides, upsert (GET, POST)
/// /edited-moves/{name}               get, delete override
///
/// /quiz-scores                       submit, list (POST, GET)
/// /quiz-scores/leaderboard           per-player leaderboard (GET)
/// /quiz-scores/player/{name}         one player's scores (GET)
/// /quiz-scores/{id}                  delete score
/// /berry-scores                      same shape as quiz scores
/// /pokedoku-scores                   same shape, perfect-grid leaderboard
/// /pokedoku-games                    save, list game snapshots (POST, GET)
///
/// /teams                             create, list (POST, GET)
/// /teams/{id}                        get, replace, delete
/// /favorites                         add, list (POST, GET)
/// /favorites/count                   favorite count (GET)
/// /favorites/{pokemon_id}            is-favorite check, remove (GET, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pokemon", merged::pokemon_router())
        .nest("/item", merged::item_router())
        .nest("/move", merged::move_router())
        .nest("/edited-pokemon", overrides::pokemon_router())
        .nest("/edited-items", overrides::item_router())
        .nest("/edited-moves", overrides::move_router())
        .nest("/quiz-scores", scores::quiz_router())
        .nest("/berry-scores", scores::berry_router())
        .nest("/pokedoku-scores", scores::pokedoku_score_router())
        .nest("/pokedoku-games", scores::pokedoku_game_router())
        .nest("/teams", teams::router())
        .nest("/favorites", favorites::router())
}
