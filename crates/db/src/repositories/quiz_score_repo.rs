//! Repository for the `quiz_scores` table.

use sqlx::PgPool;

use pokecompanion_core::scores::{clamp_limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT};
use pokecompanion_core::types::DbId;

use crate::models::score::{CreateQuizScore, QuizLeaderboardEntry, QuizScore};

/// Column list for quiz_scores queries.
const COLUMNS: &str = "id, player_name, score, total_questions, quiz_type, completed_at";

/// Provides CRUD and leaderboard queries for quiz scores.
pub struct QuizScoreRepo;

impl QuizScoreRepo {
    /// Insert a new quiz score, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuizScore) -> Result<QuizScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO quiz_scores (player_name, score, total_questions, quiz_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuizScore>(&query)
            .bind(&input.player_name)
            .bind(input.score)
            .bind(input.total_questions)
            .bind(&input.quiz_type)
            .fetch_one(pool)
            .await
    }

    /// List scores, best first, optionally filtered by quiz type.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        quiz_type: Option<&str>,
    ) -> Result<Vec<QuizScore>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);

        if let Some(quiz_type) = quiz_type {
            let query = format!(
                "SELECT {COLUMNS} FROM quiz_scores
                 WHERE quiz_type = $1
                 ORDER BY score DESC, completed_at DESC
                 LIMIT $2"
            );
            sqlx::query_as::<_, QuizScore>(&query)
                .bind(quiz_type)
                .bind(limit)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM quiz_scores
                 ORDER BY score DESC, completed_at DESC
                 LIMIT $1"
            );
            sqlx::query_as::<_, QuizScore>(&query)
                .bind(limit)
                .fetch_all(pool)
                .await
        }
    }

    /// Per-player leaderboard: best score, games played, average score.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<QuizLeaderboardEntry>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT);
        sqlx::query_as::<_, QuizLeaderboardEntry>(
            "SELECT
                player_name,
                MAX(score) AS best_score,
                COUNT(*) AS games_played,
                AVG(score)::float8 AS avg_score
             FROM quiz_scores
             GROUP BY player_name
             ORDER BY best_score DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// List all scores for one player, newest first.
    pub async fn by_player(pool: &PgPool, player_name: &str) -> Result<Vec<QuizScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quiz_scores
             WHERE player_name = $1
             ORDER BY completed_at DESC"
        );
        sqlx::query_as::<_, QuizScore>(&query)
            .bind(player_name)
            .fetch_all(pool)
            .await
    }

    /// Delete a score by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quiz_scores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
