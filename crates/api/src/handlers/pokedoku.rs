//! Handlers for Pokédoku: completed scores, the perfect-grid leaderboard,
//! and saved in-progress game state.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::scores::{
    validate_difficulty, validate_player_name, POKEDOKU_GRID_CELLS,
};
use pokecompanion_core::types::DbId;
use pokecompanion_db::models::pokedoku_game::CreatePokedokuGame;
use pokecompanion_db::models::score::CreatePokedokuScore;
use pokecompanion_db::repositories::{PokedokuGameRepo, PokedokuScoreRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::quiz_scores::LeaderboardParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// POST /api/v1/pokedoku-scores
pub async fn create_score(
    State(state): State<AppState>,
    Json(input): Json<CreatePokedokuScore>,
) -> AppResult<impl IntoResponse> {
    validate_player_name(&input.player_name).map_err(AppError::BadRequest)?;
    if let Some(difficulty) = input.puzzle_difficulty.as_deref() {
        validate_difficulty(difficulty).map_err(AppError::BadRequest)?;
    }
    if !(0..=POKEDOKU_GRID_CELLS).contains(&input.correct_answers) {
        return Err(AppError::BadRequest(format!(
            "correct_answers must be between 0 and {POKEDOKU_GRID_CELLS}"
        )));
    }
    if input.moves_used < input.correct_answers {
        return Err(AppError::BadRequest(
            "moves_used cannot be less than correct_answers".to_string(),
        ));
    }

    let score = PokedokuScoreRepo::create(&state.pool, &input).await?;

    tracing::info!(score_id = score.id, player = %score.player_name, "Pokedoku score recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: score })))
}

/// GET /api/v1/pokedoku-scores?limit=
pub async fn list_scores(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let scores = PokedokuScoreRepo::list(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// GET /api/v1/pokedoku-scores/leaderboard?limit=
///
/// Perfect grids only, fewest moves first.
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let entries = PokedokuScoreRepo::leaderboard(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/pokedoku-scores/player/{name}
pub async fn scores_by_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let scores = PokedokuScoreRepo::by_player(&state.pool, &name).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// DELETE /api/v1/pokedoku-scores/{id}
pub async fn delete_score(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PokedokuScoreRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pokedoku score",
            key: id.to_string(),
        }));
    }

    tracing::info!(score_id = id, "Pokedoku score deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Saved games
// ---------------------------------------------------------------------------

/// POST /api/v1/pokedoku-games
///
/// Save a game snapshot. The grid is an opaque client document.
pub async fn save_game(
    State(state): State<AppState>,
    Json(input): Json<CreatePokedokuGame>,
) -> AppResult<impl IntoResponse> {
    if !input.grid_data.is_object() && !input.grid_data.is_array() {
        return Err(AppError::BadRequest(
            "grid_data must be a JSON object or array".to_string(),
        ));
    }

    let game = PokedokuGameRepo::create(&state.pool, &input).await?;

    tracing::info!(game_id = game.id, completed = game.completed, "Pokedoku game saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: game })))
}

/// GET /api/v1/pokedoku-games?limit=
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let games = PokedokuGameRepo::list(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: games }))
}
