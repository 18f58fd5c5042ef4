pub mod berry_scores;
pub mod favorites;
pub mod items;
pub mod moves;
pub mod overrides;
pub mod pokedoku;
pub mod pokemon;
pub mod quiz_scores;
pub mod teams;
