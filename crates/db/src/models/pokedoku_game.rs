//! In-progress Pokédoku game state.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokecompanion_core::types::{DbId, Timestamp};

/// A row from the `pokedoku_games` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PokedokuGame {
    pub id: DbId,
    pub grid_data: serde_json::Value,
    pub guesses_remaining: i64,
    pub score: i64,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a Pokédoku game.
#[derive(Debug, Deserialize)]
pub struct CreatePokedokuGame {
    pub grid_data: serde_json::Value,
    pub guesses_remaining: Option<i64>,
    pub score: Option<i64>,
    pub completed: Option<bool>,
}
