//! Minigame score constants and validation.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a player name.
pub const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// Default number of scores returned by list endpoints.
pub const DEFAULT_SCORE_LIMIT: i64 = 10;

/// Maximum number of scores returned by list endpoints.
pub const MAX_SCORE_LIMIT: i64 = 100;

/// A Pokédoku grid has 9 cells; a perfect game answers all of them.
pub const POKEDOKU_GRID_CELLS: i64 = 9;

/// Pokédoku puzzle difficulties.
pub const DIFFICULTY_NORMAL: &str = "normal";

/// All valid Pokédoku difficulties.
pub const VALID_DIFFICULTIES: &[&str] = &["easy", "normal", "hard"];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a player name for a score submission.
pub fn validate_player_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Player name is required".to_string());
    }
    if name.len() > MAX_PLAYER_NAME_LENGTH {
        return Err(format!(
            "Player name exceeds maximum length of {MAX_PLAYER_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a Pokédoku puzzle difficulty.
pub fn validate_difficulty(difficulty: &str) -> Result<(), String> {
    if VALID_DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(format!(
            "Invalid difficulty '{difficulty}', expected one of: {}",
            VALID_DIFFICULTIES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Clamp a caller-supplied limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
