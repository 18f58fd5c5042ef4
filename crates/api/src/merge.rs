//! Merged-view construction: canonical upstream JSON + override overlay.
//!
//! The merge precedence rules live here, kept free of HTTP and database
//! concerns so they can be unit tested directly:
//!
//! - every canonical field is preserved verbatim;
//! - `edited` is true iff an override row exists for the entity's key;
//! - `custom_data` carries the override's annotation fields when edited and
//!   is JSON `null` otherwise, never an empty object, so clients can tell
//!   "not edited" from "edited with all-empty notes".

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Value};

use pokecompanion_db::repositories::OverrideKind;
use pokecompanion_pokeapi::urls;

use crate::error::AppError;

/// Pull the numeric upstream id out of a canonical document. Override
/// tables are keyed by this id, never by the caller-supplied key, so a
/// fetch by name and a fetch by id resolve to the same override row.
pub fn canonical_id(document: &Value) -> Result<i64, AppError> {
    document
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::UpstreamShape("document has no numeric 'id' field".to_string()))
}

/// Overlay an optional `custom_data` document onto a canonical upstream
/// document, adding the `edited` flag.
///
/// The canonical document must be a JSON object; anything else cannot
/// carry the overlay fields and is reported as a malformed upstream
/// response rather than passed through without them.
pub fn merge_document(mut canonical: Value, custom_data: Option<Value>) -> Result<Value, AppError> {
    let Some(obj) = canonical.as_object_mut() else {
        return Err(AppError::UpstreamShape(
            "canonical document is not a JSON object".to_string(),
        ));
    };
    obj.insert("edited".to_string(), json!(custom_data.is_some()));
    obj.insert(
        "custom_data".to_string(),
        custom_data.unwrap_or(Value::Null),
    );
    Ok(canonical)
}

/// Project an override row into its `custom_data` representation: all
/// annotation fields plus timestamps, minus the key and name columns (those
/// duplicate the canonical document).
pub fn custom_data<K>(record: &K::Record) -> Result<Value, AppError>
where
    K: OverrideKind,
    K::Record: Serialize,
{
    let mut value = serde_json::to_value(record)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize override row: {e}")))?;

    if let Some(obj) = value.as_object_mut() {
        obj.remove(K::KEY_COLUMN);
        if let Some(name_column) = K::NAME_COLUMN {
            obj.remove(name_column);
        }
    }
    Ok(value)
}

/// Annotate each entry of a canonical list document with an `edited` flag.
///
/// List entries reference entities only by canonical URL, so each entry's id
/// is parsed from the URL's trailing path segment. An entry whose URL does
/// not yield an id is marked not-edited.
pub fn annotate_list_results(mut listing: Value, edited_ids: &HashSet<i64>) -> Value {
    if let Some(results) = listing.get_mut("results").and_then(Value::as_array_mut) {
        for entry in results {
            let edited = entry
                .get("url")
                .and_then(Value::as_str)
                .and_then(urls::trailing_id)
                .is_some_and(|id| edited_ids.contains(&id));

            if let Some(obj) = entry.as_object_mut() {
                obj.insert("edited".to_string(), json!(edited));
            }
        }
    }
    listing
}
