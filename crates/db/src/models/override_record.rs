//! Override row models, one per entity kind.
//!
//! Each row attaches local annotations to one upstream PokéAPI entity.
//! `edited_at` is set on first insert and preserved across upserts;
//! `updated_at` is refreshed on every write.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokecompanion_core::types::{Timestamp, UpstreamId};

/// A row from the `edited_pokemon` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EditedPokemon {
    pub pokemon_id: UpstreamId,
    pub pokemon_name: String,
    pub flavor_text: Option<String>,
    pub classification: Option<String>,
    pub abilities: Option<String>,
    pub habitat: Option<String>,
    pub egg_groups: Option<String>,
    pub growth_rate: Option<String>,
    pub custom_notes: Option<String>,
    pub edited_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload for an edited Pokémon.
///
/// A field left out of the payload is stored as NULL, not merged with the
/// previous value: upsert is a full replace of the annotation fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEditedPokemon {
    pub pokemon_id: UpstreamId,
    pub pokemon_name: String,
    pub flavor_text: Option<String>,
    pub classification: Option<String>,
    pub abilities: Option<String>,
    pub habitat: Option<String>,
    pub egg_groups: Option<String>,
    pub growth_rate: Option<String>,
    pub custom_notes: Option<String>,
}

/// A row from the `edited_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EditedItem {
    pub item_id: UpstreamId,
    pub item_name: String,
    pub effect_description: Option<String>,
    pub cost: Option<i64>,
    pub custom_notes: Option<String>,
    pub edited_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload for an edited Item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEditedItem {
    pub item_id: UpstreamId,
    pub item_name: String,
    pub effect_description: Option<String>,
    pub cost: Option<i64>,
    pub custom_notes: Option<String>,
}

/// A row from the `edited_moves` table. Move identity is the lower-cased
/// move name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EditedMove {
    pub move_name: String,
    pub flavor_text: Option<String>,
    pub custom_notes: Option<String>,
    pub edited_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload for an edited Move.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEditedMove {
    pub move_name: String,
    pub flavor_text: Option<String>,
    pub custom_notes: Option<String>,
}
