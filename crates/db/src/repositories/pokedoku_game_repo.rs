//! Repository for the `pokedoku_games` table (saved game state).

use sqlx::PgPool;

use pokecompanion_core::scores::{clamp_limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT};

use crate::models::pokedoku_game::{CreatePokedokuGame, PokedokuGame};

/// Column list for pokedoku_games queries.
const COLUMNS: &str =
    "id, grid_data, guesses_remaining, score, completed, created_at, updated_at";

/// Stores in-progress Pokédoku games.
pub struct PokedokuGameRepo;

impl PokedokuGameRepo {
    /// Save a game snapshot, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePokedokuGame,
    ) -> Result<PokedokuGame, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokedoku_games (grid_data, guesses_remaining, score, completed)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokedokuGame>(&query)
            .bind(&input.grid_data)
            .bind(input.guesses_remaining.unwrap_or(0))
            .bind(input.score.unwrap_or(0))
            .bind(input.completed.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// List saved games, newest first.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<PokedokuGame>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM pokedoku_games
             ORDER BY created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, PokedokuGame>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
