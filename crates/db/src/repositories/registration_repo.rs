//! Repository for the `registrations` table.

use promenade_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::registration::{CreateRegistration, Registration};

/// Column list for `registrations` queries.
const COLUMNS: &str = "id, partnership_id, age_division_id, skill_level_id, \
     selected_dances, status, created_at";

/// Provides read/write operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a new registration row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations \
                (partnership_id, age_division_id, skill_level_id, selected_dances, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(input.partnership_id)
            .bind(&input.age_division_id)
            .bind(&input.skill_level_id)
            .bind(Json(&input.selected_dances))
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// List a partnership's registrations in insertion order.
    pub async fn list_by_partnership(
        pool: &PgPool,
        partnership_id: DbId,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM registrations WHERE partnership_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(partnership_id)
            .fetch_all(pool)
            .await
    }
}
