//! Repository for the `dancers` table.

use sqlx::PgPool;

use crate::models::dancer::{Dancer, UpsertDancer};

/// Column list for `dancers` queries.
const COLUMNS: &str = "id, first_name, last_name, email, phone, date_of_birth, \
     is_professional, created_at, updated_at";

/// Provides read/write operations for dancers.
pub struct DancerRepo;

impl DancerRepo {
    /// Insert a dancer, or update the existing row with the same email.
    ///
    /// Uses INSERT ... ON CONFLICT on the email unique constraint so a
    /// repeated submission updates the dancer in place instead of
    /// creating a duplicate. Returns the resulting row either way.
    pub async fn upsert(pool: &PgPool, input: &UpsertDancer) -> Result<Dancer, sqlx::Error> {
        let query = format!(
            "INSERT INTO dancers \
                (first_name, last_name, email, phone, date_of_birth, is_professional) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (email) DO UPDATE SET \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 phone = EXCLUDED.phone, \
                 date_of_birth = EXCLUDED.date_of_birth, \
                 is_professional = EXCLUDED.is_professional, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dancer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.date_of_birth)
            .bind(input.is_professional)
            .fetch_one(pool)
            .await
    }

    /// Find a dancer by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Dancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dancers WHERE email = $1");
        sqlx::query_as::<_, Dancer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
