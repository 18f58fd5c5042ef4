pub mod berry_score_repo;
pub mod favorite_repo;
pub mod override_repo;
pub mod pokedoku_game_repo;
pub mod pokedoku_score_repo;
pub mod quiz_score_repo;
pub mod team_repo;

pub use berry_score_repo::BerryScoreRepo;
pub use favorite_repo::FavoriteRepo;
pub use override_repo::{
    EditedItemRepo, EditedMoveRepo, EditedPokemonRepo, ItemKind, MoveKind, OverrideKind,
    OverrideRepo, PokemonKind,
};
pub use pokedoku_game_repo::PokedokuGameRepo;
pub use pokedoku_score_repo::PokedokuScoreRepo;
pub use quiz_score_repo::QuizScoreRepo;
pub use team_repo::TeamRepo;
