//! Partnership entity model and create DTO.

use promenade_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `partnerships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partnership {
    pub id: DbId,
    pub leader_id: DbId,
    pub follower_id: DbId,
    pub event_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for inserting a partnership.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnership {
    pub leader_id: DbId,
    pub follower_id: DbId,
    pub event_id: DbId,
}
