//! Override (edited entity) constants and validation.
//!
//! An override row attaches locally-authored annotations to one upstream
//! PokéAPI entity. Its key must match the upstream identifier exactly:
//! the numeric id for Pokémon and Items, the unique lower-cased name for
//! Moves.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length accepted for any free-text annotation field.
pub const MAX_ANNOTATION_LENGTH: usize = 10_000;

/// Maximum length accepted for an entity name (Pokémon/Item/Move).
pub const MAX_ENTITY_NAME_LENGTH: usize = 100;

/// Entity kinds that support overrides.
pub const KIND_POKEMON: &str = "pokemon";
pub const KIND_ITEM: &str = "item";
pub const KIND_MOVE: &str = "move";

// ---------------------------------------------------------------------------
// Key normalization
// ---------------------------------------------------------------------------

/// Normalize a move name for use as an override key.
///
/// Move identity is case-insensitive: `"Thunderbolt"` and `"thunderbolt"`
/// address the same override row. Rows are stored lower-cased, so every
/// entry point (proxy fetch, override get/upsert/delete) runs the supplied
/// name through this function first.
pub fn normalize_move_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an entity name supplied on an override upsert.
///
/// The name is the one required payload field for every kind; annotation
/// fields are independently optional.
pub fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Entity name is required".to_string());
    }
    if name.len() > MAX_ENTITY_NAME_LENGTH {
        return Err(format!(
            "Entity name exceeds maximum length of {MAX_ENTITY_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional free-text annotation field.
pub fn validate_annotation(field: &str, value: Option<&str>) -> Result<(), String> {
    if let Some(text) = value {
        if text.len() > MAX_ANNOTATION_LENGTH {
            return Err(format!(
                "Field '{field}' exceeds maximum length of {MAX_ANNOTATION_LENGTH} characters"
            ));
        }
    }
    Ok(())
}
