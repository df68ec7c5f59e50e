//! Dancer entity model and upsert DTO.

use chrono::NaiveDate;
use promenade_core::partnership::DancerDraft;
use promenade_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dancers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dancer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_professional: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the email-keyed dancer upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertDancer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_professional: bool,
}

impl From<&DancerDraft> for UpsertDancer {
    fn from(draft: &DancerDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            date_of_birth: draft.date_of_birth,
            is_professional: draft.is_professional,
        }
    }
}
