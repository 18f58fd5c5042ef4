//! Repository for the `pokemon_teams` table.

use sqlx::PgPool;

use pokecompanion_core::types::DbId;

use crate::models::team::{PokemonTeam, SaveTeam};

/// Column list for pokemon_teams queries.
const COLUMNS: &str = "id, team_name, pokemon_data, created_at, updated_at";

/// Provides CRUD operations for saved teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Create a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &SaveTeam) -> Result<PokemonTeam, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemon_teams (team_name, pokemon_data)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonTeam>(&query)
            .bind(&input.team_name)
            .bind(&input.pokemon_data)
            .fetch_one(pool)
            .await
    }

    /// List all teams, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PokemonTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon_teams ORDER BY updated_at DESC");
        sqlx::query_as::<_, PokemonTeam>(&query).fetch_all(pool).await
    }

    /// Find a team by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PokemonTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon_teams WHERE id = $1");
        sqlx::query_as::<_, PokemonTeam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a team's name and roster, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveTeam,
    ) -> Result<Option<PokemonTeam>, sqlx::Error> {
        let query = format!(
            "UPDATE pokemon_teams
             SET team_name = $2, pokemon_data = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonTeam>(&query)
            .bind(id)
            .bind(&input.team_name)
            .bind(&input.pokemon_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokemon_teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
