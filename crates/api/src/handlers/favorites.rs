//! Handlers for favorite Pokémon.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::overrides::validate_entity_name;
use pokecompanion_core::types::UpstreamId;
use pokecompanion_db::models::favorite::CreateFavorite;
use pokecompanion_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/favorites
///
/// Favoriting a Pokémon twice is a conflict, not a silent no-op.
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    if input.pokemon_id <= 0 {
        return Err(AppError::BadRequest(
            "pokemon_id must be a positive id".to_string(),
        ));
    }
    validate_entity_name(&input.pokemon_name).map_err(AppError::BadRequest)?;

    let favorite = FavoriteRepo::add(&state.pool, &input).await?.ok_or_else(|| {
        AppError::Conflict(format!("Pokemon {} is already a favorite", input.pokemon_id))
    })?;

    tracing::info!(pokemon_id = favorite.pokemon_id, "Favorite added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let favorites = FavoriteRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: favorites }))
}

/// GET /api/v1/favorites/count
pub async fn count_favorites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = FavoriteRepo::count(&state.pool).await?;

    Ok(Json(json!({ "count": count })))
}

/// GET /api/v1/favorites/{pokemon_id}
///
/// Is-favorite check; always 200.
pub async fn is_favorite(
    State(state): State<AppState>,
    Path(pokemon_id): Path<UpstreamId>,
) -> AppResult<impl IntoResponse> {
    let favorited = FavoriteRepo::is_favorite(&state.pool, pokemon_id).await?;

    Ok(Json(json!({ "pokemon_id": pokemon_id, "is_favorite": favorited })))
}

/// DELETE /api/v1/favorites/{pokemon_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(pokemon_id): Path<UpstreamId>,
) -> AppResult<impl IntoResponse> {
    let removed = FavoriteRepo::remove(&state.pool, pokemon_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            key: pokemon_id.to_string(),
        }));
    }

    tracing::info!(pokemon_id, "Favorite removed");

    Ok(StatusCode::NO_CONTENT)
}
