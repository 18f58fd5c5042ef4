pub mod favorite;
pub mod override_record;
pub mod pokedoku_game;
pub mod score;
pub mod team;
