//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /                      -> list_open
/// GET /{id}                  -> get_by_id
/// GET /{id}/configuration    -> get_configuration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list_open))
        .route("/{id}", get(event::get_by_id))
        .route("/{id}/configuration", get(event::get_configuration))
}
