//! Minigame score models: quiz, berry memory game, and Pokédoku.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokecompanion_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

/// A row from the `quiz_scores` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuizScore {
    pub id: DbId,
    pub player_name: String,
    pub score: i64,
    pub total_questions: i64,
    pub quiz_type: Option<String>,
    pub completed_at: Timestamp,
}

/// DTO for submitting a quiz score.
#[derive(Debug, Deserialize)]
pub struct CreateQuizScore {
    pub player_name: String,
    pub score: i64,
    pub total_questions: i64,
    pub quiz_type: Option<String>,
}

/// One leaderboard row: a player's best quiz result.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuizLeaderboardEntry {
    pub player_name: String,
    pub best_score: i64,
    pub games_played: i64,
    pub avg_score: f64,
}

// ---------------------------------------------------------------------------
// Berry memory game
// ---------------------------------------------------------------------------

/// A row from the `berry_game_scores` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BerryGameScore {
    pub id: DbId,
    pub player_name: String,
    pub score: i64,
    pub moves: i64,
    pub time_seconds: Option<i64>,
    pub completed_at: Timestamp,
}

/// DTO for submitting a berry game score.
#[derive(Debug, Deserialize)]
pub struct CreateBerryGameScore {
    pub player_name: String,
    pub score: i64,
    pub moves: i64,
    pub time_seconds: Option<i64>,
}

/// One leaderboard row: a player's best berry game result (fewest moves,
/// then best time).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BerryLeaderboardEntry {
    pub player_name: String,
    pub best_moves: i64,
    pub best_time: Option<i64>,
    pub games_played: i64,
}

// ---------------------------------------------------------------------------
// Pokédoku
// ---------------------------------------------------------------------------

/// A row from the `pokedoku_scores` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PokedokuScore {
    pub id: DbId,
    pub player_name: String,
    pub moves_used: i64,
    pub correct_answers: i64,
    pub puzzle_difficulty: String,
    pub completed_at: Timestamp,
}

/// DTO for submitting a Pokédoku score.
#[derive(Debug, Deserialize)]
pub struct CreatePokedokuScore {
    pub player_name: String,
    pub moves_used: i64,
    pub correct_answers: i64,
    pub puzzle_difficulty: Option<String>,
}
