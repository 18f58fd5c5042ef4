//! Favorite Pokémon model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokecompanion_core::types::{DbId, Timestamp, UpstreamId};

/// A row from the `favorite_pokemon` table. At most one row per upstream
/// Pokémon id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoritePokemon {
    pub id: DbId,
    pub pokemon_id: UpstreamId,
    pub pokemon_name: String,
    pub added_at: Timestamp,
}

/// DTO for adding a favorite.
#[derive(Debug, Deserialize)]
pub struct CreateFavorite {
    pub pokemon_id: UpstreamId,
    pub pokemon_name: String,
}
