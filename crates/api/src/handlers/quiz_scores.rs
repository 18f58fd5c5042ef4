//! Handlers for quiz score submission, listings, and the leaderboard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::scores::validate_player_name;
use pokecompanion_core::types::DbId;
use pokecompanion_db::models::score::CreateQuizScore;
use pokecompanion_db::repositories::QuizScoreRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for score listings.
#[derive(Debug, Deserialize)]
pub struct ScoreListParams {
    pub limit: Option<i64>,
    pub quiz_type: Option<String>,
}

/// Query parameters for leaderboards.
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<i64>,
}

/// POST /api/v1/quiz-scores
pub async fn create_score(
    State(state): State<AppState>,
    Json(input): Json<CreateQuizScore>,
) -> AppResult<impl IntoResponse> {
    validate_player_name(&input.player_name).map_err(AppError::BadRequest)?;
    if input.score < 0 || input.total_questions <= 0 {
        return Err(AppError::BadRequest(
            "score must be non-negative and total_questions positive".to_string(),
        ));
    }
    if input.score > input.total_questions {
        return Err(AppError::BadRequest(
            "score cannot exceed total_questions".to_string(),
        ));
    }

    let score = QuizScoreRepo::create(&state.pool, &input).await?;

    tracing::info!(score_id = score.id, player = %score.player_name, "Quiz score recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: score })))
}

/// GET /api/v1/quiz-scores?limit=&quiz_type=
pub async fn list_scores(
    State(state): State<AppState>,
    Query(params): Query<ScoreListParams>,
) -> AppResult<impl IntoResponse> {
    let scores =
        QuizScoreRepo::list(&state.pool, params.limit, params.quiz_type.as_deref()).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// GET /api/v1/quiz-scores/leaderboard?limit=
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let entries = QuizScoreRepo::leaderboard(&state.pool, params.limit).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/quiz-scores/player/{name}
pub async fn scores_by_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let scores = QuizScoreRepo::by_player(&state.pool, &name).await?;

    Ok(Json(DataResponse { data: scores }))
}

/// DELETE /api/v1/quiz-scores/{id}
pub async fn delete_score(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuizScoreRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Quiz score",
            key: id.to_string(),
        }));
    }

    tracing::info!(score_id = id, "Quiz score deleted");

    Ok(StatusCode::NO_CONTENT)
}
