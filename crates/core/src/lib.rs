//! Domain types shared across the pokecompanion workspace.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the PokéAPI client, and the HTTP API alike.

pub mod error;
pub mod overrides;
pub mod scores;
pub mod types;
