//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the row is written

pub mod dancer;
pub mod event;
pub mod event_configuration;
pub mod partnership;
pub mod registration;
