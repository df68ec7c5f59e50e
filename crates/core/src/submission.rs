//! Submission planning: the cross-product of selected divisions and
//! levels, each pair carrying the same selected-dance snapshot.
//!
//! Planning is pure; the API layer executes the plan as a sequence of
//! record-store calls (dancer upserts, partnership insert, registration
//! inserts) in the order produced here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::selection::{DanceKey, SelectionState};

// ---------------------------------------------------------------------------
// Registration status
// ---------------------------------------------------------------------------

/// Lifecycle status of a registration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Paid,
}

impl RegistrationStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "paid" => Ok(Self::Paid),
            _ => Err(CoreError::Validation(format!(
                "Invalid registration status '{s}'. Must be one of: pending, confirmed, paid"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Paid => "paid",
        }
    }
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// One registration to be inserted: a (division, level) pair plus the
/// dance snapshot taken at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRegistration {
    pub age_division_id: String,
    pub skill_level_id: String,
    pub selected_dances: Vec<DanceKey>,
    pub status: RegistrationStatus,
}

/// Expand a selection into the registrations to insert, in
/// division-major, level-minor order.
///
/// The dance list is snapshotted once and attached identically to every
/// pair; it is not re-derived per registration. New registrations always
/// start as `pending`.
pub fn plan_registrations(selection: &SelectionState) -> Vec<PlannedRegistration> {
    let snapshot: Vec<DanceKey> = selection.dances().to_vec();
    let mut planned = Vec::with_capacity(
        selection.age_divisions().len() * selection.skill_levels().len(),
    );

    for division_id in selection.age_divisions() {
        for level_id in selection.skill_levels() {
            planned.push(PlannedRegistration {
                age_division_id: division_id.clone(),
                skill_level_id: level_id.clone(),
                selected_dances: snapshot.clone(),
                status: RegistrationStatus::Pending,
            });
        }
    }

    planned
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
