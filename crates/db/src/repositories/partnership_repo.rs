//! Repository for the `partnerships` table.

use promenade_core::types::DbId;
use sqlx::PgPool;

use crate::models::partnership::{CreatePartnership, Partnership};

/// Column list for `partnerships` queries.
const COLUMNS: &str = "id, leader_id, follower_id, event_id, created_at";

/// Provides read/write operations for partnerships.
pub struct PartnershipRepo;

impl PartnershipRepo {
    /// Insert a new partnership row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnership,
    ) -> Result<Partnership, sqlx::Error> {
        let query = format!(
            "INSERT INTO partnerships (leader_id, follower_id, event_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partnership>(&query)
            .bind(input.leader_id)
            .bind(input.follower_id)
            .bind(input.event_id)
            .fetch_one(pool)
            .await
    }

    /// Find a partnership by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partnership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partnerships WHERE id = $1");
        sqlx::query_as::<_, Partnership>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
