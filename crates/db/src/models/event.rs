//! Event and organization entity models.

use promenade_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub org_type: String,
    pub created_at: Timestamp,
}

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub registration_deadline: Timestamp,
    pub created_at: Timestamp,
}

/// An event row joined with its organization's display fields, as shown
/// on the event-selection step.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithOrganization {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub registration_deadline: Timestamp,
    pub created_at: Timestamp,
    pub organization_name: String,
    pub organization_type: String,
}
