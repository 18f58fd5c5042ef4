//! Merge proxy handlers for items: single merged view and the flagged list.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use pokecompanion_db::repositories::{EditedItemRepo, ItemKind};

use crate::error::AppResult;
use crate::merge::{annotate_list_results, canonical_id, custom_data, merge_document};
use crate::state::AppState;

/// Paging parameters for the item list, passed through to PokéAPI.
#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Default page size for the item list. PokéAPI caps a single page well
/// above the full item count, so one request covers the whole catalog.
const DEFAULT_ITEM_LIMIT: i64 = 1000;

/// GET /api/v1/item/{key}
///
/// Merged item view. `key` may be a numeric id or a name.
pub async fn get_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let canonical = state.pokeapi.get_item(&key).await?;

    let id = canonical_id(&canonical)?;
    let override_row = EditedItemRepo::get(&state.pool, id).await?;
    let custom = override_row
        .as_ref()
        .map(custom_data::<ItemKind>)
        .transpose()?;

    tracing::debug!(%key, id, edited = custom.is_some(), "Merged item fetched");

    Ok(Json(merge_document(canonical, custom)?))
}

/// GET /api/v1/item?limit=&offset=
///
/// Paged canonical item listing with a per-entry `edited` flag. List
/// entries only carry name and URL upstream, so the flag is resolved by
/// parsing each entry's id from its canonical URL; no `custom_data` here.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_ITEM_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let listing = state.pokeapi.list_items(limit, offset).await?;

    let edited_ids: HashSet<i64> = EditedItemRepo::get_all(&state.pool)
        .await?
        .into_iter()
        .map(|row| row.item_id)
        .collect();

    tracing::debug!(limit, offset, edited = edited_ids.len(), "Item list fetched");

    Ok(Json(annotate_list_results(listing, &edited_ids)))
}
