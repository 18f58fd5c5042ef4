//! Override CRUD handlers.
//!
//! List, get, and delete are generic over the entity kind; upsert is
//! per-kind because each payload has its own required fields and
//! validation. All handlers normalize the key the same way the merge
//! proxy does, so `PUT`-then-`GET` under different casings agree.

use std::fmt::Display;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use pokecompanion_core::error::CoreError;
use pokecompanion_core::overrides::{normalize_move_name, validate_annotation, validate_entity_name};
use pokecompanion_db::models::override_record::{
    UpsertEditedItem, UpsertEditedMove, UpsertEditedPokemon,
};
use pokecompanion_db::repositories::{
    EditedItemRepo, EditedMoveRepo, EditedPokemonRepo, OverrideKind, OverrideRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Generic read/delete
// ---------------------------------------------------------------------------

/// GET /api/v1/edited-{kind}
///
/// All override rows for the kind, most recently updated first.
pub async fn list_overrides<K>(State(state): State<AppState>) -> AppResult<impl IntoResponse>
where
    K: OverrideKind,
    K::Record: Serialize,
{
    let rows = OverrideRepo::<K>::get_all(&state.pool).await?;

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/edited-{kind}/{key}
///
/// One override row. A miss is not an error: the entity exists upstream
/// regardless, so the response is `{"edited": false}` rather than a 404.
pub async fn get_override<K>(
    State(state): State<AppState>,
    Path(key): Path<K::Key>,
) -> AppResult<impl IntoResponse>
where
    K: OverrideKind,
    K::Key: DeserializeOwned + Send,
    K::Record: Serialize,
{
    let key = K::normalize_key(key);
    let row = OverrideRepo::<K>::get(&state.pool, key).await?;

    let body = match row {
        Some(record) => json!({ "edited": true, "data": record }),
        None => json!({ "edited": false }),
    };
    Ok(Json(body))
}

/// DELETE /api/v1/edited-{kind}/{key}
///
/// Revert the entity to pure upstream data. Deleting an override that
/// does not exist is a 404; a later merged fetch of the entity is
/// indistinguishable from one that was never edited.
pub async fn delete_override<K>(
    State(state): State<AppState>,
    Path(key): Path<K::Key>,
) -> AppResult<impl IntoResponse>
where
    K: OverrideKind,
    K::Key: DeserializeOwned + Display + Clone + Send,
{
    let key = K::normalize_key(key);
    let deleted = OverrideRepo::<K>::delete(&state.pool, key.clone()).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: K::ENTITY,
            key: key.to_string(),
        }));
    }

    tracing::info!(entity = K::ENTITY, key = %key, "Override deleted");

    Ok(Json(MessageResponse {
        message: "Override deleted",
    }))
}

// ---------------------------------------------------------------------------
// Per-kind upserts
// ---------------------------------------------------------------------------

/// POST /api/v1/edited-pokemon
///
/// Insert or fully replace the override for a Pokémon. Last write wins;
/// a field omitted from the payload is cleared, not kept.
pub async fn upsert_pokemon(
    State(state): State<AppState>,
    Json(input): Json<UpsertEditedPokemon>,
) -> AppResult<impl IntoResponse> {
    if input.pokemon_id <= 0 {
        return Err(AppError::BadRequest(
            "pokemon_id must be a positive id".to_string(),
        ));
    }
    validate_entity_name(&input.pokemon_name).map_err(AppError::BadRequest)?;
    for (field, value) in [
        ("flavor_text", &input.flavor_text),
        ("classification", &input.classification),
        ("abilities", &input.abilities),
        ("habitat", &input.habitat),
        ("egg_groups", &input.egg_groups),
        ("growth_rate", &input.growth_rate),
        ("custom_notes", &input.custom_notes),
    ] {
        validate_annotation(field, value.as_deref()).map_err(AppError::BadRequest)?;
    }

    let rows_affected = EditedPokemonRepo::upsert(&state.pool, &input).await?;

    tracing::info!(pokemon_id = input.pokemon_id, "Pokemon override saved");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Pokemon override saved",
            "pokemon_id": input.pokemon_id,
            "rows_affected": rows_affected,
        })),
    ))
}

/// POST /api/v1/edited-items
pub async fn upsert_item(
    State(state): State<AppState>,
    Json(input): Json<UpsertEditedItem>,
) -> AppResult<impl IntoResponse> {
    if input.item_id <= 0 {
        return Err(AppError::BadRequest(
            "item_id must be a positive id".to_string(),
        ));
    }
    validate_entity_name(&input.item_name).map_err(AppError::BadRequest)?;
    if input.cost.is_some_and(|cost| cost < 0) {
        return Err(AppError::BadRequest("cost must be non-negative".to_string()));
    }
    for (field, value) in [
        ("effect_description", &input.effect_description),
        ("custom_notes", &input.custom_notes),
    ] {
        validate_annotation(field, value.as_deref()).map_err(AppError::BadRequest)?;
    }

    let rows_affected = EditedItemRepo::upsert(&state.pool, &input).await?;

    tracing::info!(item_id = input.item_id, "Item override saved");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Item override saved",
            "item_id": input.item_id,
            "rows_affected": rows_affected,
        })),
    ))
}

/// POST /api/v1/edited-moves
///
/// The move name is normalized before storage, so `"Thunderbolt"` and
/// `"thunderbolt"` address the same override row.
pub async fn upsert_move(
    State(state): State<AppState>,
    Json(mut input): Json<UpsertEditedMove>,
) -> AppResult<impl IntoResponse> {
    input.move_name = normalize_move_name(&input.move_name);
    validate_entity_name(&input.move_name).map_err(AppError::BadRequest)?;
    for (field, value) in [
        ("flavor_text", &input.flavor_text),
        ("custom_notes", &input.custom_notes),
    ] {
        validate_annotation(field, value.as_deref()).map_err(AppError::BadRequest)?;
    }

    let rows_affected = EditedMoveRepo::upsert(&state.pool, &input).await?;

    tracing::info!(move_name = %input.move_name, "Move override saved");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Move override saved",
            "move_name": input.move_name,
            "rows_affected": rows_affected,
        })),
    ))
}
