//! Integration tests for override CRUD over HTTP.
//!
//! These endpoints never touch the upstream proxy, so the app is built
//! with an unroutable PokéAPI URL; any accidental upstream call fails the
//! test instead of hitting the network.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_status, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Pokémon overrides
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn pokemon_override_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Initially absent.
    let response = get(app.clone(), "/api/v1/edited-pokemon/25").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], false);
    assert!(json.get("data").is_none());

    // Upsert.
    let response = post_json(
        app.clone(),
        "/api/v1/edited-pokemon",
        json!({
            "pokemon_id": 25,
            "pokemon_name": "Pikachu",
            "flavor_text": "Loves ketchup",
            "habitat": "forest"
        }),
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["pokemon_id"], 25);
    assert_eq!(json["rows_affected"], 1);

    // Now present, with annotation fields but not the key columns.
    let response = get(app.clone(), "/api/v1/edited-pokemon/25").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], true);
    assert_eq!(json["data"]["flavor_text"], "Loves ketchup");
    assert_eq!(json["data"]["pokemon_name"], "Pikachu");

    // Listed.
    let response = get(app.clone(), "/api/v1/edited-pokemon").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Delete reverts to absent.
    let response = delete(app.clone(), "/api/v1/edited-pokemon/25").await;
    expect_status(response, StatusCode::OK).await;

    let response = get(app, "/api/v1/edited-pokemon/25").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn pokemon_upsert_is_full_replace(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/edited-pokemon",
        json!({
            "pokemon_id": 1,
            "pokemon_name": "Bulbasaur",
            "flavor_text": "A strange seed",
            "habitat": "grassland"
        }),
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    // Second write omits habitat: it must be cleared, not kept.
    let response = post_json(
        app.clone(),
        "/api/v1/edited-pokemon",
        json!({
            "pokemon_id": 1,
            "pokemon_name": "Bulbasaur",
            "flavor_text": "Updated text"
        }),
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = get(app, "/api/v1/edited-pokemon/1").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["flavor_text"], "Updated text");
    assert!(json["data"]["habitat"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn pokemon_upsert_rejects_bad_payloads(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Missing name.
    let response = post_json(
        app.clone(),
        "/api/v1/edited-pokemon",
        json!({ "pokemon_id": 25, "pokemon_name": "   " }),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    // Non-positive id.
    let response = post_json(
        app.clone(),
        "/api/v1/edited-pokemon",
        json!({ "pokemon_id": 0, "pokemon_name": "Pikachu" }),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    // Oversized annotation.
    let response = post_json(
        app,
        "/api/v1/edited-pokemon",
        json!({
            "pokemon_id": 25,
            "pokemon_name": "Pikachu",
            "custom_notes": "x".repeat(10_001)
        }),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_missing_override_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app.clone(), "/api/v1/edited-pokemon/9999").await;
    let json = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = delete(app.clone(), "/api/v1/edited-items/9999").await;
    expect_status(response, StatusCode::NOT_FOUND).await;

    let response = delete(app, "/api/v1/edited-moves/no-such-move").await;
    expect_status(response, StatusCode::NOT_FOUND).await;
}

// ---------------------------------------------------------------------------
// Item overrides
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn item_override_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/edited-items",
        json!({
            "item_id": 17,
            "item_name": "potion",
            "effect_description": "Heals 20 HP",
            "cost": 300
        }),
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["item_id"], 17);

    let response = get(app.clone(), "/api/v1/edited-items/17").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], true);
    assert_eq!(json["data"]["cost"], 300);

    let response = post_json(
        app,
        "/api/v1/edited-items",
        json!({ "item_id": 17, "item_name": "potion", "cost": -5 }),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Move overrides: case-insensitive identity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn move_override_name_is_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/edited-moves",
        json!({
            "move_name": "Thunderbolt",
            "flavor_text": "A strong electric blast"
        }),
    )
    .await;
    let json = expect_status(response, StatusCode::CREATED).await;
    // Stored and echoed lower-cased.
    assert_eq!(json["move_name"], "thunderbolt");

    // Both casings resolve to the same row.
    let response = get(app.clone(), "/api/v1/edited-moves/THUNDERBOLT").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], true);
    assert_eq!(json["data"]["flavor_text"], "A strong electric blast");

    // Upserting under another casing replaces, not duplicates.
    let response = post_json(
        app.clone(),
        "/api/v1/edited-moves",
        json!({ "move_name": "ThunderBolt", "flavor_text": "Zap" }),
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = get(app.clone(), "/api/v1/edited-moves").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Delete under mixed casing removes it.
    let response = delete(app.clone(), "/api/v1/edited-moves/Thunderbolt").await;
    expect_status(response, StatusCode::OK).await;

    let response = get(app, "/api/v1/edited-moves/thunderbolt").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["edited"], false);
}
