//! Shared response envelope types for API handlers.
//!
//! List and record responses use a `{ "data": ... }` envelope. Merged
//! entity views are the one exception: they must preserve the upstream
//! document's top-level fields verbatim, so they are returned unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response for mutations that do not return a row (`{ "message": ... }`).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
