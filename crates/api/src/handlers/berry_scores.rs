//! Handlers for berry memory game scores.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::scores::validate_player_name;
use pokecompanion_core::types::DbId;
use pokecompanion_db::models::score::CreateBerryGameScore;
use pokecompanion_db::repositories::BerryScoreRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::quiz_scores::LeaderboardParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/berry-scores
pub async fn create_score(
    State(state): State<AppState>,
    Json(input): Json<CreateBerryGameScore>,
) -> AppResult<impl IntoResponse> {
    validate_player_name(&input.player_name).map_err(AppError::BadRequest)?;
    if input.score < 0 || input.moves <= 0 {
        return Err(AppError::BadRequest(
            "score must be non-negative and moves positive".to_string(),
        ));
    }
    if input.time_seconds.is_some_and(|t| t < 0) {
        return Err(AppError::BadRequest(
            "time_seconds must be non-negative".to_string(),
        ));
    }

    let score = BerryScoreRepo::create(&state.pool, &input).await?;

    tracing::info!(score_id = score.id, player = %score.player_name, "Berry game score recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: score })))
}

/// GET /api/v1/berry-scores?limit=
pub async fn list_scores(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let scores = BerryScoreRepo::list(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// GET /api/v1/berry-scores/leaderboard?limit=
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let entries = BerryScoreRepo::leaderboard(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/berry-scores/player/{name}
pub async fn scores_by_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let scores = BerryScoreRepo::by_player(&state.pool, &name).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// DELETE /api/v1/berry-scores/{id}
pub async fn delete_score(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BerryScoreRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Berry game score",
            key: id.to_string(),
        }));
    }

    tracing::info!(score_id = id, "Berry game score deleted");

    Ok(StatusCode::NO_CONTENT)
}
