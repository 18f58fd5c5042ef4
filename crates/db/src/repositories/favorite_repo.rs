//! Repository for the `favorite_pokemon` table.

use sqlx::PgPool;

use pokecompanion_core::types::UpstreamId;

use crate::models::favorite::{CreateFavorite, FavoritePokemon};

/// Column list for favorite_pokemon queries.
const COLUMNS: &str = "id, pokemon_id, pokemon_name, added_at";

/// Stores favorited Pokémon, at most one row per upstream id.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Add a favorite. Returns `None` if the Pokémon was already favorited.
    pub async fn add(
        pool: &PgPool,
        input: &CreateFavorite,
    ) -> Result<Option<FavoritePokemon>, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorite_pokemon (pokemon_id, pokemon_name)
             VALUES ($1, $2)
             ON CONFLICT (pokemon_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FavoritePokemon>(&query)
            .bind(input.pokemon_id)
            .bind(&input.pokemon_name)
            .fetch_optional(pool)
            .await
    }

    /// List all favorites, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FavoritePokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorite_pokemon ORDER BY added_at DESC");
        sqlx::query_as::<_, FavoritePokemon>(&query)
            .fetch_all(pool)
            .await
    }

    /// Check whether a Pokémon is favorited.
    pub async fn is_favorite(pool: &PgPool, pokemon_id: UpstreamId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM favorite_pokemon WHERE pokemon_id = $1)",
        )
        .bind(pokemon_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Remove a favorite by upstream Pokémon id. Returns `true` if a row
    /// was deleted.
    pub async fn remove(pool: &PgPool, pokemon_id: UpstreamId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_pokemon WHERE pokemon_id = $1")
            .bind(pokemon_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count favorites.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorite_pokemon")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
