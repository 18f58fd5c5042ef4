//! Merge proxy handlers for Pokémon.
//!
//! Fetches the canonical document from PokéAPI, follows `species.url`, then
//! overlays the local override row (if any) as `edited`/`custom_data`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use pokecompanion_db::repositories::{EditedPokemonRepo, PokemonKind};

use crate::error::AppResult;
use crate::merge::{canonical_id, custom_data, merge_document};
use crate::state::AppState;

/// GET /api/v1/pokemon/{key}
///
/// Merged Pokémon view. `key` may be a numeric id or a name; PokéAPI
/// accepts both. The canonical document is extended with `species_data`
/// (the followed `species.url` document) before the override overlay.
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut canonical = state.pokeapi.get_pokemon(&key).await?;

    let species_url = canonical
        .pointer("/species/url")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(url) = species_url {
        let species = state.pokeapi.get_url(&url).await?;
        if let Some(obj) = canonical.as_object_mut() {
            obj.insert("species_data".to_string(), species);
        }
    }

    let id = canonical_id(&canonical)?;
    let override_row = EditedPokemonRepo::get(&state.pool, id).await?;
    let custom = override_row
        .as_ref()
        .map(custom_data::<PokemonKind>)
        .transpose()?;

    tracing::debug!(%key, id, edited = custom.is_some(), "Merged Pokemon fetched");

    Ok(Json(merge_document(canonical, custom)?))
}

/// GET /api/v1/pokemon/species/{key}
///
/// Merged species view. The override overlay uses the species document's
/// own numeric id, which matches the Pokémon id for the default form.
pub async fn get_species(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let canonical = state.pokeapi.get_pokemon_species(&key).await?;

    let id = canonical_id(&canonical)?;
    let override_row = EditedPokemonRepo::get(&state.pool, id).await?;
    let custom = override_row
        .as_ref()
        .map(custom_data::<PokemonKind>)
        .transpose()?;

    tracing::debug!(%key, id, edited = custom.is_some(), "Merged species fetched");

    Ok(Json(merge_document(canonical, custom)?))
}
