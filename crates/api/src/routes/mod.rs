//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                              service + database health
//!
//! /events                              list open events (GET)
//! /events/{id}                         event detail (GET)
//! /events/{id}/configuration           divisions/levels/dances catalog (GET)
//!
//! /registrations/review                validate a draft, return summary (POST)
//! /registrations                       submit a reviewed draft (POST)
//! ```

pub mod events;
pub mod health;
pub mod registrations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/registrations", registrations::router())
}
