//! Repository for the `pokedoku_scores` table.

use sqlx::PgPool;

use pokecompanion_core::scores::{
    clamp_limit, DEFAULT_SCORE_LIMIT, DIFFICULTY_NORMAL, MAX_SCORE_LIMIT, POKEDOKU_GRID_CELLS,
};
use pokecompanion_core::types::DbId;

use crate::models::score::{CreatePokedokuScore, PokedokuScore};

/// Column list for pokedoku_scores queries.
const COLUMNS: &str =
    "id, player_name, moves_used, correct_answers, puzzle_difficulty, completed_at";

/// Provides CRUD and leaderboard queries for Pokédoku scores.
pub struct PokedokuScoreRepo;

impl PokedokuScoreRepo {
    /// Insert a new Pokédoku score, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePokedokuScore,
    ) -> Result<PokedokuScore, sqlx::Error> {
        let difficulty = input.puzzle_difficulty.as_deref().unwrap_or(DIFFICULTY_NORMAL);
        let query = format!(
            "INSERT INTO pokedoku_scores
                (player_name, moves_used, correct_answers, puzzle_difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokedokuScore>(&query)
            .bind(&input.player_name)
            .bind(input.moves_used)
            .bind(input.correct_answers)
            .bind(difficulty)
            .fetch_one(pool)
            .await
    }

    /// List scores: most correct answers first, then fewest moves.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<PokedokuScore>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM pokedoku_scores
             ORDER BY correct_answers DESC, moves_used ASC, completed_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, PokedokuScore>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Leaderboard: perfect grids only (all cells answered), fewest moves
    /// first, earliest completion breaking ties.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<PokedokuScore>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM pokedoku_scores
             WHERE correct_answers = $1
             ORDER BY moves_used ASC, completed_at ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, PokedokuScore>(&query)
            .bind(POKEDOKU_GRID_CELLS)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List all scores for one player, newest first.
    pub async fn by_player(
        pool: &PgPool,
        player_name: &str,
    ) -> Result<Vec<PokedokuScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pokedoku_scores
             WHERE player_name = $1
             ORDER BY completed_at DESC"
        );
        sqlx::query_as::<_, PokedokuScore>(&query)
            .bind(player_name)
            .fetch_all(pool)
            .await
    }

    /// Delete a score by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokedoku_scores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
