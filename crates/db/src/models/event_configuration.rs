//! Event configuration entity model.
//!
//! The catalog arrays are JSONB columns deserialized straight into the
//! core catalog types via `sqlx::types::Json`.

use promenade_core::catalog::{AgeDivision, DanceCategory, SkillLevel};
use promenade_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `event_configurations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventConfiguration {
    pub id: DbId,
    pub event_id: DbId,
    pub age_divisions: Json<Vec<AgeDivision>>,
    pub skill_levels: Json<Vec<SkillLevel>>,
    pub dance_categories: Json<Vec<DanceCategory>>,
    pub created_at: Timestamp,
}
