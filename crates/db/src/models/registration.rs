//! Registration entity model and create DTO.

use promenade_core::error::CoreError;
use promenade_core::selection::DanceKey;
use promenade_core::submission::{PlannedRegistration, RegistrationStatus};
use promenade_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `registrations` table: one (age division, skill level)
/// entry for a partnership, carrying the dance snapshot taken at
/// submission time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub partnership_id: DbId,
    pub age_division_id: String,
    pub skill_level_id: String,
    pub selected_dances: Json<Vec<DanceKey>>,
    pub status: String,
    pub created_at: Timestamp,
}

impl Registration {
    /// Parse the stored status string.
    pub fn status(&self) -> Result<RegistrationStatus, CoreError> {
        RegistrationStatus::from_str_db(&self.status)
    }
}

/// DTO for inserting a registration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegistration {
    pub partnership_id: DbId,
    pub age_division_id: String,
    pub skill_level_id: String,
    pub selected_dances: Vec<DanceKey>,
    pub status: RegistrationStatus,
}

impl CreateRegistration {
    /// Attach a planned registration to the partnership it belongs to.
    pub fn from_plan(partnership_id: DbId, plan: PlannedRegistration) -> Self {
        Self {
            partnership_id,
            age_division_id: plan.age_division_id,
            skill_level_id: plan.skill_level_id,
            selected_dances: plan.selected_dances,
            status: plan.status,
        }
    }
}
