//! Repository for the `berry_game_scores` table.

use sqlx::PgPool;

use pokecompanion_core::scores::{clamp_limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT};
use pokecompanion_core::types::DbId;

use crate::models::score::{BerryGameScore, BerryLeaderboardEntry, CreateBerryGameScore};

/// Column list for berry_game_scores queries.
const COLUMNS: &str = "id, player_name, score, moves, time_seconds, completed_at";

/// Provides CRUD and leaderboard queries for berry memory game scores.
pub struct BerryScoreRepo;

impl BerryScoreRepo {
    /// Insert a new berry game score, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBerryGameScore,
    ) -> Result<BerryGameScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO berry_game_scores (player_name, score, moves, time_seconds)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BerryGameScore>(&query)
            .bind(&input.player_name)
            .bind(input.score)
            .bind(input.moves)
            .bind(input.time_seconds)
            .fetch_one(pool)
            .await
    }

    /// List scores: highest score first, ties broken by fewest moves then
    /// fastest time.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<BerryGameScore>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM berry_game_scores
             ORDER BY score DESC, moves ASC, time_seconds ASC, completed_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, BerryGameScore>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Per-player leaderboard: fewest moves, then best time.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<BerryLeaderboardEntry>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        sqlx::query_as::<_, BerryLeaderboardEntry>(
            "SELECT
                player_name,
                MIN(moves) AS best_moves,
                MIN(time_seconds) AS best_time,
                COUNT(*) AS games_played
             FROM berry_game_scores
             GROUP BY player_name
             ORDER BY best_moves ASC, best_time ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// List all scores for one player, newest first.
    pub async fn by_player(
        pool: &PgPool,
        player_name: &str,
    ) -> Result<Vec<BerryGameScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM berry_game_scores
             WHERE player_name = $1
             ORDER BY completed_at DESC"
        );
        sqlx::query_as::<_, BerryGameScore>(&query)
            .bind(player_name)
            .fetch_all(pool)
            .await
    }

    /// Delete a score by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM berry_game_scores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
