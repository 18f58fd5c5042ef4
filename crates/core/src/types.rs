/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Upstream PokéAPI entity ids (Pokémon, Items) share the same integer space.
pub type UpstreamId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
