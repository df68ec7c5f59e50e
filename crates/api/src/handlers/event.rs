//! Handlers for the `/events` resource: the data the wizard fetches on
//! its first and third steps.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use promenade_core::catalog::in_display_order;
use promenade_core::error::CoreError;
use promenade_core::types::DbId;
use promenade_db::models::event::{Event, EventWithOrganization};
use promenade_db::models::event_configuration::EventConfiguration;
use promenade_db::repositories::{EventConfigurationRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/events
///
/// Lists events whose registration deadline has not passed, joined with
/// their organization. Events past the deadline are filtered out here;
/// the wizard never sees them.
pub async fn list_open(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EventWithOrganization>>> {
    let events = EventRepo::list_open(&state.pool, Utc::now()).await?;

    tracing::debug!(count = events.len(), "Listed open events");

    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// GET /api/v1/events/{id}/configuration
///
/// Divisions and levels are served in `display_order`, regardless of how
/// the stored arrays happen to be ordered.
pub async fn get_configuration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventConfiguration>> {
    let mut config = EventConfigurationRepo::find_by_event(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventConfiguration",
            id,
        }))?;

    config.age_divisions.0 = in_display_order(&config.age_divisions.0);
    config.skill_levels.0 = in_display_order(&config.skill_levels.0);

    Ok(Json(config))
}
