//! Route definitions for the `/registrations` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Routes mounted at `/registrations`.
///
/// ```text
/// POST /review    -> review (validate draft, return summary)
/// POST /          -> submit (run the submission sequence)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(registration::submit))
        .route("/review", post(registration::review))
}
