//! HTTP client for the upstream PokéAPI.
//!
//! The PokéAPI is the system of record for canonical entity data; its JSON
//! is passed through to clients verbatim, so everything here works with
//! [`serde_json::Value`] documents rather than typed models.

pub mod client;
pub mod urls;

pub use client::{PokeApiClient, PokeApiError};
