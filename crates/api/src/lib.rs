//! HTTP API for the pokecompanion service.
//!
//! Exposes the PokéAPI merge proxy, override CRUD, minigame scores, teams,
//! and favorites under `/api/v1`, with a `/health` probe at the root.

pub mod config;
pub mod error;
pub mod handlers;
pub mod merge;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
