//! Handlers for saved Pokémon teams.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::types::DbId;
use pokecompanion_db::models::team::SaveTeam;
use pokecompanion_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A team holds at most six Pokémon.
const MAX_TEAM_SIZE: usize = 6;

fn validate_team(input: &SaveTeam) -> Result<(), AppError> {
    if input.team_name.trim().is_empty() {
        return Err(AppError::BadRequest("team_name is required".to_string()));
    }
    let roster = input
        .pokemon_data
        .as_array()
        .ok_or_else(|| AppError::BadRequest("pokemon_data must be a JSON array".to_string()))?;
    if roster.len() > MAX_TEAM_SIZE {
        return Err(AppError::BadRequest(format!(
            "A team holds at most {MAX_TEAM_SIZE} Pokemon"
        )));
    }
    Ok(())
}

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(input): Json<SaveTeam>,
) -> AppResult<impl IntoResponse> {
    validate_team(&input)?;

    let team = TeamRepo::create(&state.pool, &input).await?;

    tracing::info!(team_id = team.id, name = %team.team_name, "Team created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

/// GET /api/v1/teams
pub async fn list_teams(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let teams = TeamRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: teams }))
}

/// GET /api/v1/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Team",
            key: id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: team }))
}

/// PUT /api/v1/teams/{id}
///
/// Full replace of name and roster.
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveTeam>,
) -> AppResult<impl IntoResponse> {
    validate_team(&input)?;

    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Team",
            key: id.to_string(),
        }))?;

    tracing::info!(team_id = id, "Team updated");

    Ok(Json(DataResponse { data: team }))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Team",
            key: id.to_string(),
        }));
    }

    tracing::info!(team_id = id, "Team deleted");

    Ok(StatusCode::NO_CONTENT)
}
