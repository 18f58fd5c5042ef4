//! Merge proxy handler for moves.
//!
//! Move identity is the lower-cased name, both upstream and in the
//! override table, so the supplied name is normalized before anything
//! else touches it.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use pokecompanion_core::overrides::normalize_move_name;
use pokecompanion_db::repositories::{EditedMoveRepo, MoveKind};

use crate::error::AppResult;
use crate::merge::{custom_data, merge_document};
use crate::state::AppState;

/// GET /api/v1/move/{name}
///
/// Merged move view. `"Thunderbolt"` and `"thunderbolt"` resolve to the
/// same upstream document and the same override row.
pub async fn get_move(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_move_name(&name);

    let canonical = state.pokeapi.get_move(&name).await?;
    let override_row = EditedMoveRepo::get(&state.pool, name.clone()).await?;
    let custom = override_row
        .as_ref()
        .map(custom_data::<MoveKind>)
        .transpose()?;

    tracing::debug!(%name, edited = custom.is_some(), "Merged move fetched");

    Ok(Json(merge_document(canonical, custom)?))
}
