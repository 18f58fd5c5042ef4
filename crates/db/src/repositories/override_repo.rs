//! Generic repository for override (edited entity) tables.
//!
//! The original per-kind stores are near-identical single-table CRUD, so one
//! [`OverrideRepo`] is parameterized by an [`OverrideKind`] describing the
//! table: key type, row type, upsert payload, and column names. Table and
//! column identifiers only ever come from the compile-time constants on the
//! kind impls below; caller input is always a bound parameter.

use std::marker::PhantomData;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres};

use crate::models::override_record::{
    EditedItem, EditedMove, EditedPokemon, UpsertEditedItem, UpsertEditedMove,
    UpsertEditedPokemon,
};

/// Static description of one override table.
///
/// Implemented by uninhabited marker types, one per entity kind. The repo
/// builds its queries from these constants and delegates upsert binding to
/// the kind, which is the only per-kind SQL.
pub trait OverrideKind {
    /// Upstream identity: numeric id for Pokémon/Items, lower-cased name
    /// for Moves.
    type Key: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send;
    /// Full row type.
    type Record: for<'r> FromRow<'r, PgRow> + Send + Unpin;
    /// Upsert payload (key + annotation fields).
    type Upsert: Send + Sync;

    /// Entity name for error messages (e.g. `"Pokemon"`).
    const ENTITY: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Primary key column.
    const KEY_COLUMN: &'static str;
    /// Required display-name column, if the kind has one besides the key.
    const NAME_COLUMN: Option<&'static str>;
    /// Full select list.
    const COLUMNS: &'static str;

    /// Build the `INSERT ... ON CONFLICT (key) DO UPDATE` statement.
    ///
    /// The conflict arm must replace every annotation field (full replace,
    /// not patch), refresh `updated_at`, and leave `edited_at` alone.
    fn upsert_sql() -> String;

    /// Bind the upsert payload fields in the order `upsert_sql` expects.
    fn bind_upsert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        input: &'q Self::Upsert,
    ) -> Query<'q, Postgres, PgArguments>;

    /// Normalize a caller-supplied key to its canonical form. Identity for
    /// numeric kinds; moves lower-case and trim.
    fn normalize_key(key: Self::Key) -> Self::Key {
        key
    }
}

/// CRUD over one override table, generic in the entity kind.
pub struct OverrideRepo<K: OverrideKind> {
    _kind: PhantomData<K>,
}

impl<K: OverrideKind> OverrideRepo<K> {
    /// Find an override row by upstream key. A miss is `None`, not an error.
    pub async fn get(pool: &PgPool, key: K::Key) -> Result<Option<K::Record>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            K::COLUMNS,
            K::TABLE,
            K::KEY_COLUMN
        );
        sqlx::query_as::<_, K::Record>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all override rows, most recently updated first.
    ///
    /// Unbounded: the override dataset is small (at most a few thousand
    /// entities) and the list feeds the merge proxy's edited-flag lookup.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<K::Record>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY updated_at DESC",
            K::COLUMNS,
            K::TABLE
        );
        sqlx::query_as::<_, K::Record>(&query).fetch_all(pool).await
    }

    /// Insert or fully replace the row for the payload's key.
    ///
    /// Atomic single-statement upsert: concurrent readers see either the
    /// old row or the new one, never a mix. Returns rows affected (always
    /// 1 on success; Postgres does not distinguish the insert arm from the
    /// update arm here).
    pub async fn upsert(pool: &PgPool, input: &K::Upsert) -> Result<u64, sqlx::Error> {
        let sql = K::upsert_sql();
        let result = K::bind_upsert(sqlx::query(&sql), input)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row for the given key, reverting the entity to pure
    /// upstream data. Returns `false` if no override existed.
    pub async fn delete(pool: &PgPool, key: K::Key) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE {} = $1", K::TABLE, K::KEY_COLUMN);
        let result = sqlx::query(&query).bind(key).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Kind definitions
// ---------------------------------------------------------------------------

/// Pokémon override kind: `edited_pokemon`, keyed by upstream Pokémon id.
pub struct PokemonKind;

impl OverrideKind for PokemonKind {
    type Key = i64;
    type Record = EditedPokemon;
    type Upsert = UpsertEditedPokemon;

    const ENTITY: &'static str = "Pokemon";
    const TABLE: &'static str = "edited_pokemon";
    const KEY_COLUMN: &'static str = "pokemon_id";
    const NAME_COLUMN: Option<&'static str> = Some("pokemon_name");
    const COLUMNS: &'static str = "pokemon_id, pokemon_name, flavor_text, classification, \
        abilities, habitat, egg_groups, growth_rate, custom_notes, edited_at, updated_at";

    fn upsert_sql() -> String {
        "INSERT INTO edited_pokemon
            (pokemon_id, pokemon_name, flavor_text, classification, abilities,
             habitat, egg_groups, growth_rate, custom_notes)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         ON CONFLICT (pokemon_id) DO UPDATE SET
            pokemon_name = EXCLUDED.pokemon_name,
            flavor_text = EXCLUDED.flavor_text,
            classification = EXCLUDED.classification,
            abilities = EXCLUDED.abilities,
            habitat = EXCLUDED.habitat,
            egg_groups = EXCLUDED.egg_groups,
            growth_rate = EXCLUDED.growth_rate,
            custom_notes = EXCLUDED.custom_notes,
            updated_at = NOW()"
            .to_string()
    }

    fn bind_upsert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        input: &'q Self::Upsert,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(input.pokemon_id)
            .bind(&input.pokemon_name)
            .bind(&input.flavor_text)
            .bind(&input.classification)
            .bind(&input.abilities)
            .bind(&input.habitat)
            .bind(&input.egg_groups)
            .bind(&input.growth_rate)
            .bind(&input.custom_notes)
    }
}

/// Item override kind: `edited_items`, keyed by upstream item id.
pub struct ItemKind;

impl OverrideKind for ItemKind {
    type Key = i64;
    type Record = EditedItem;
    type Upsert = UpsertEditedItem;

    const ENTITY: &'static str = "Item";
    const TABLE: &'static str = "edited_items";
    const KEY_COLUMN: &'static str = "item_id";
    const NAME_COLUMN: Option<&'static str> = Some("item_name");
    const COLUMNS: &'static str =
        "item_id, item_name, effect_description, cost, custom_notes, edited_at, updated_at";

    fn upsert_sql() -> String {
        "INSERT INTO edited_items
            (item_id, item_name, effect_description, cost, custom_notes)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (item_id) DO UPDATE SET
            item_name = EXCLUDED.item_name,
            effect_description = EXCLUDED.effect_description,
            cost = EXCLUDED.cost,
            custom_notes = EXCLUDED.custom_notes,
            updated_at = NOW()"
            .to_string()
    }

    fn bind_upsert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        input: &'q Self::Upsert,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(input.item_id)
            .bind(&input.item_name)
            .bind(&input.effect_description)
            .bind(input.cost)
            .bind(&input.custom_notes)
    }
}

/// Move override kind: `edited_moves`, keyed by lower-cased move name.
///
/// Callers must normalize the name before it reaches the repo (see
/// `pokecompanion_core::overrides::normalize_move_name`); the table CHECK
/// constraint is only a backstop.
pub struct MoveKind;

impl OverrideKind for MoveKind {
    type Key = String;
    type Record = EditedMove;
    type Upsert = UpsertEditedMove;

    const ENTITY: &'static str = "Move";
    const TABLE: &'static str = "edited_moves";
    const KEY_COLUMN: &'static str = "move_name";
    const NAME_COLUMN: Option<&'static str> = None;
    const COLUMNS: &'static str = "move_name, flavor_text, custom_notes, edited_at, updated_at";

    fn upsert_sql() -> String {
        "INSERT INTO edited_moves (move_name, flavor_text, custom_notes)
         VALUES ($1, $2, $3)
         ON CONFLICT (move_name) DO UPDATE SET
            flavor_text = EXCLUDED.flavor_text,
            custom_notes = EXCLUDED.custom_notes,
            updated_at = NOW()"
            .to_string()
    }

    fn bind_upsert<'q>(
        query: Query<'q, Postgres, PgArguments>,
        input: &'q Self::Upsert,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(&input.move_name)
            .bind(&input.flavor_text)
            .bind(&input.custom_notes)
    }

    fn normalize_key(key: Self::Key) -> Self::Key {
        pokecompanion_core::overrides::normalize_move_name(&key)
    }
}

/// Repo over the `edited_pokemon` table.
pub type EditedPokemonRepo = OverrideRepo<PokemonKind>;
/// Repo over the `edited_items` table.
pub type EditedItemRepo = OverrideRepo<ItemKind>;
/// Repo over the `edited_moves` table.
pub type EditedMoveRepo = OverrideRepo<MoveKind>;
