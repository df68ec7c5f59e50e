//! Repository for the `event_configurations` table.

use promenade_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_configuration::EventConfiguration;

/// Column list for `event_configurations` queries.
const COLUMNS: &str = "id, event_id, age_divisions, skill_levels, dance_categories, created_at";

/// Provides read operations for event configurations.
pub struct EventConfigurationRepo;

impl EventConfigurationRepo {
    /// Find the configuration for an event. Each event has at most one.
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<EventConfiguration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_configurations WHERE event_id = $1");
        sqlx::query_as::<_, EventConfiguration>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }
}
