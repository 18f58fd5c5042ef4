//! Integration tests for the generic override repository against a real
//! database: upsert replace semantics, timestamp handling, ordering, and
//! revert behaviour for all three entity kinds.

use sqlx::PgPool;

use pokecompanion_db::models::override_record::{
    UpsertEditedItem, UpsertEditedMove, UpsertEditedPokemon,
};
use pokecompanion_db::repositories::{EditedItemRepo, EditedMoveRepo, EditedPokemonRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn pikachu() -> UpsertEditedPokemon {
    UpsertEditedPokemon {
        pokemon_id: 25,
        pokemon_name: "Pikachu".to_string(),
        flavor_text: Some("Loves ketchup".to_string()),
        classification: Some("Mouse Pokemon".to_string()),
        abilities: None,
        habitat: Some("forest".to_string()),
        egg_groups: None,
        growth_rate: None,
        custom_notes: None,
    }
}

fn potion() -> UpsertEditedItem {
    UpsertEditedItem {
        item_id: 17,
        item_name: "potion".to_string(),
        effect_description: Some("Heals 20 HP".to_string()),
        cost: Some(300),
        custom_notes: None,
    }
}

fn thunderbolt() -> UpsertEditedMove {
    UpsertEditedMove {
        move_name: "thunderbolt".to_string(),
        flavor_text: Some("A strong electric blast".to_string()),
        custom_notes: None,
    }
}

// ---------------------------------------------------------------------------
// Upsert semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_inserts_then_fully_replaces(pool: PgPool) {
    let rows = EditedPokemonRepo::upsert(&pool, &pikachu()).await.unwrap();
    assert_eq!(rows, 1);

    let row = EditedPokemonRepo::get(&pool, 25).await.unwrap().unwrap();
    assert_eq!(row.habitat.as_deref(), Some("forest"));
    let first_edited_at = row.edited_at;
    let first_updated_at = row.updated_at;

    // Last write wins: habitat omitted in the second payload is cleared.
    let mut second = pikachu();
    second.flavor_text = Some("Updated".to_string());
    second.habitat = None;
    EditedPokemonRepo::upsert(&pool, &second).await.unwrap();

    let row = EditedPokemonRepo::get(&pool, 25).await.unwrap().unwrap();
    assert_eq!(row.flavor_text.as_deref(), Some("Updated"));
    assert!(row.habitat.is_none());

    // edited_at survives the rewrite; updated_at moves forward.
    assert_eq!(row.edited_at, first_edited_at);
    assert!(row.updated_at >= first_updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_miss_is_none(pool: PgPool) {
    assert!(EditedPokemonRepo::get(&pool, 9999).await.unwrap().is_none());
    assert!(EditedItemRepo::get(&pool, 9999).await.unwrap().is_none());
    assert!(EditedMoveRepo::get(&pool, "no-such-move".to_string())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_all_orders_by_most_recent_update(pool: PgPool) {
    let mut bulbasaur = pikachu();
    bulbasaur.pokemon_id = 1;
    bulbasaur.pokemon_name = "Bulbasaur".to_string();

    EditedPokemonRepo::upsert(&pool, &bulbasaur).await.unwrap();
    EditedPokemonRepo::upsert(&pool, &pikachu()).await.unwrap();

    // Touch Bulbasaur again: it must move to the front.
    EditedPokemonRepo::upsert(&pool, &bulbasaur).await.unwrap();

    let rows = EditedPokemonRepo::get_all(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].pokemon_id, 1);
    assert_eq!(rows[1].pokemon_id, 25);
}

// ---------------------------------------------------------------------------
// Delete / revert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_reverts_and_reports_missing_rows(pool: PgPool) {
    EditedItemRepo::upsert(&pool, &potion()).await.unwrap();

    assert!(EditedItemRepo::delete(&pool, 17).await.unwrap());
    assert!(EditedItemRepo::get(&pool, 17).await.unwrap().is_none());

    // Deleting again reports that nothing existed.
    assert!(!EditedItemRepo::delete(&pool, 17).await.unwrap());
}

// ---------------------------------------------------------------------------
// Move kind specifics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn move_rows_are_keyed_by_lowercase_name(pool: PgPool) {
    EditedMoveRepo::upsert(&pool, &thunderbolt()).await.unwrap();

    let row = EditedMoveRepo::get(&pool, "thunderbolt".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.move_name, "thunderbolt");

    // The table CHECK constraint rejects non-normalized names that slip
    // past the callers.
    let bad = UpsertEditedMove {
        move_name: "ThunderBolt".to_string(),
        flavor_text: None,
        custom_notes: None,
    };
    assert!(EditedMoveRepo::upsert(&pool, &bad).await.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn item_upsert_replaces_all_fields(pool: PgPool) {
    EditedItemRepo::upsert(&pool, &potion()).await.unwrap();

    let mut second = potion();
    second.effect_description = None;
    second.cost = Some(250);
    EditedItemRepo::upsert(&pool, &second).await.unwrap();

    let row = EditedItemRepo::get(&pool, 17).await.unwrap().unwrap();
    assert!(row.effect_description.is_none());
    assert_eq!(row.cost, Some(250));

    let all = EditedItemRepo::get_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}
