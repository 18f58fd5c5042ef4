//! Route definitions for saved teams.

use axum::routing::get;
use axum::Router;

use crate::handlers::teams;
use crate::state::AppState;

/// Team routes mounted at `/teams`.
///
/// ```text
/// POST   /        -> create_team
/// GET    /        -> list_teams
/// GET    /{id}    -> get_team
/// PUT    /{id}    -> update_team
/// DELETE /{id}    -> delete_team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(teams::list_teams).post(teams::create_team))
        .route(
            "/{id}",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
}
