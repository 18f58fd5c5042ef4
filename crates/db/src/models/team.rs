//! Pokémon team model. The team roster is stored as an opaque JSON
//! document supplied by the client.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokecompanion_core::types::{DbId, Timestamp};

/// A row from the `pokemon_teams` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PokemonTeam {
    pub id: DbId,
    pub team_name: String,
    pub pokemon_data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a team. PUT is a full replace, so the
/// same shape serves both.
#[derive(Debug, Deserialize)]
pub struct SaveTeam {
    pub team_name: String,
    pub pokemon_data: serde_json::Value,
}
