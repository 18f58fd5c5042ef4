//! Integration tests for saved teams and favorite Pokémon.

use serde_json::json;
use sqlx::PgPool;

use pokecompanion_db::models::favorite::CreateFavorite;
use pokecompanion_db::models::team::SaveTeam;
use pokecompanion_db::repositories::{FavoriteRepo, TeamRepo};

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

fn kanto_team() -> SaveTeam {
    SaveTeam {
        team_name: "Kanto Starters".to_string(),
        pokemon_data: json!([
            { "id": 1, "name": "bulbasaur" },
            { "id": 4, "name": "charmander" },
            { "id": 7, "name": "squirtle" }
        ]),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn team_crud_round_trip(pool: PgPool) {
    let team = TeamRepo::create(&pool, &kanto_team()).await.unwrap();
    assert_eq!(team.team_name, "Kanto Starters");
    assert_eq!(team.pokemon_data.as_array().unwrap().len(), 3);

    let found = TeamRepo::find_by_id(&pool, team.id).await.unwrap().unwrap();
    assert_eq!(found.id, team.id);

    // PUT is a full replace of name and roster.
    let replacement = SaveTeam {
        team_name: "Electric Only".to_string(),
        pokemon_data: json!([{ "id": 25, "name": "pikachu" }]),
    };
    let updated = TeamRepo::update(&pool, team.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.team_name, "Electric Only");
    assert_eq!(updated.pokemon_data.as_array().unwrap().len(), 1);
    assert!(updated.updated_at >= team.updated_at);

    assert!(TeamRepo::delete(&pool, team.id).await.unwrap());
    assert!(TeamRepo::find_by_id(&pool, team.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn updating_missing_team_returns_none(pool: PgPool) {
    let result = TeamRepo::update(&pool, 9999, &kanto_team()).await.unwrap();
    assert!(result.is_none());

    assert!(!TeamRepo::delete(&pool, 9999).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn teams_list_most_recently_updated_first(pool: PgPool) {
    let first = TeamRepo::create(&pool, &kanto_team()).await.unwrap();
    let second = TeamRepo::create(
        &pool,
        &SaveTeam {
            team_name: "Johto".to_string(),
            pokemon_data: json!([]),
        },
    )
    .await
    .unwrap();

    // Touch the first team: it moves to the front.
    TeamRepo::update(&pool, first.id, &kanto_team()).await.unwrap();

    let teams = TeamRepo::list(&pool).await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, first.id);
    assert_eq!(teams[1].id, second.id);
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

fn favorite(id: i64, name: &str) -> CreateFavorite {
    CreateFavorite {
        pokemon_id: id,
        pokemon_name: name.to_string(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn favorite_round_trip(pool: PgPool) {
    let added = FavoriteRepo::add(&pool, &favorite(25, "pikachu"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(added.pokemon_id, 25);

    assert!(FavoriteRepo::is_favorite(&pool, 25).await.unwrap());
    assert!(!FavoriteRepo::is_favorite(&pool, 1).await.unwrap());
    assert_eq!(FavoriteRepo::count(&pool).await.unwrap(), 1);

    assert!(FavoriteRepo::remove(&pool, 25).await.unwrap());
    assert!(!FavoriteRepo::is_favorite(&pool, 25).await.unwrap());
    assert!(!FavoriteRepo::remove(&pool, 25).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_favorite_is_rejected(pool: PgPool) {
    FavoriteRepo::add(&pool, &favorite(25, "pikachu"))
        .await
        .unwrap()
        .unwrap();

    // Second add for the same Pokémon yields no row.
    let duplicate = FavoriteRepo::add(&pool, &favorite(25, "pikachu")).await.unwrap();
    assert!(duplicate.is_none());

    assert_eq!(FavoriteRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn favorites_list_newest_first(pool: PgPool) {
    FavoriteRepo::add(&pool, &favorite(1, "bulbasaur")).await.unwrap();
    FavoriteRepo::add(&pool, &favorite(25, "pikachu")).await.unwrap();

    let favorites = FavoriteRepo::list(&pool).await.unwrap();
    assert_eq!(favorites.len(), 2);
    assert!(favorites[0].added_at >= favorites[1].added_at);
}
