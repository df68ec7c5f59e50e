//! Repository for the `events` and `organizations` tables.

use promenade_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{Event, EventWithOrganization};

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "id, organization_id, name, description, logo_url, \
     start_date, end_date, registration_deadline, created_at";

/// Column list for event queries joined with organizations.
const EVENT_WITH_ORG_COLUMNS: &str = "e.id, e.organization_id, e.name, e.description, e.logo_url, \
     e.start_date, e.end_date, e.registration_deadline, e.created_at, \
     o.name AS organization_name, o.org_type AS organization_type";

/// Provides read operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List events still open for registration (deadline at or after
    /// `now`), joined with their organization, ordered by start date.
    pub async fn list_open(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<EventWithOrganization>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_WITH_ORG_COLUMNS} FROM events e \
             JOIN organizations o ON o.id = e.organization_id \
             WHERE e.registration_deadline >= $1 \
             ORDER BY e.start_date"
        );
        sqlx::query_as::<_, EventWithOrganization>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Find an event by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
