//! REST client for the PokéAPI HTTP endpoints.
//!
//! Wraps the read-only PokéAPI (Pokémon, species, items, moves) using
//! [`reqwest`], with an explicit per-request timeout so a slow upstream
//! cannot hold requests open indefinitely.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

/// Public PokéAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors from the PokéAPI client.
///
/// `NotFound` is the one permanent failure: the entity does not exist
/// upstream and retrying cannot help. Everything else means the upstream
/// was unreachable or misbehaving.
#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    /// Upstream returned 404 for the requested entity.
    #[error("{resource} '{key}' not found upstream")]
    NotFound {
        /// Resource kind, e.g. `"Pokemon"`.
        resource: &'static str,
        /// The key that was requested.
        key: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// body was not valid JSON.
    #[error("PokeAPI request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned an unexpected non-2xx status.
    #[error("PokeAPI error ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for one PokéAPI deployment.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client for the given base URL (no trailing slash) with an
    /// explicit request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a Pokémon by id or name: `GET /pokemon/{key}`.
    pub async fn get_pokemon(&self, key: &str) -> Result<Value, PokeApiError> {
        self.get_json("Pokemon", key, format!("{}/pokemon/{key}", self.base_url))
            .await
    }

    /// Fetch a Pokémon species by id or name: `GET /pokemon-species/{key}`.
    pub async fn get_pokemon_species(&self, key: &str) -> Result<Value, PokeApiError> {
        self.get_json(
            "Species",
            key,
            format!("{}/pokemon-species/{key}", self.base_url),
        )
        .await
    }

    /// Fetch an item by id or name: `GET /item/{key}`.
    pub async fn get_item(&self, key: &str) -> Result<Value, PokeApiError> {
        self.get_json("Item", key, format!("{}/item/{key}", self.base_url))
            .await
    }

    /// Fetch a move by its (already normalized) name: `GET /move/{name}`.
    pub async fn get_move(&self, name: &str) -> Result<Value, PokeApiError> {
        self.get_json("Move", name, format!("{}/move/{name}", self.base_url))
            .await
    }

    /// Fetch a paged item listing: `GET /item?limit=&offset=`.
    pub async fn list_items(&self, limit: i64, offset: i64) -> Result<Value, PokeApiError> {
        self.get_json(
            "Item list",
            "",
            format!("{}/item?limit={limit}&offset={offset}", self.base_url),
        )
        .await
    }

    /// Follow a canonical URL embedded in an upstream document (e.g. the
    /// `species.url` field of a Pokémon).
    pub async fn get_url(&self, url: &str) -> Result<Value, PokeApiError> {
        self.get_json("Resource", url, url.to_string()).await
    }

    /// Issue a GET and map the response: 404 to [`PokeApiError::NotFound`],
    /// other non-2xx to [`PokeApiError::UnexpectedStatus`], success to the
    /// decoded JSON body.
    async fn get_json(
        &self,
        resource: &'static str,
        key: &str,
        url: String,
    ) -> Result<Value, PokeApiError> {
        tracing::debug!(%url, "Fetching from PokeAPI");
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokeApiError::NotFound {
                resource,
                key: key.to_string(),
            });
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, %url, "Unexpected PokeAPI status");
            return Err(PokeApiError::UnexpectedStatus { status, body });
        }

        Ok(response.json().await?)
    }
}
