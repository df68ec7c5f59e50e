//! Partnership draft: the leader/follower pair entered on the second
//! wizard step, before any database records exist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Draft details for one dancer. Mirrors the dancer record minus the
/// database-assigned fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DancerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub is_professional: bool,
}

/// The leader/follower pair being registered together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnershipDraft {
    pub leader: DancerDraft,
    pub follower: DancerDraft,
}

impl PartnershipDraft {
    /// Guard for leaving the partnership step: both dancers must have a
    /// first and last name. Email and the remaining fields are collected
    /// on this step but not required to advance.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_dancer(&self.leader, "Leader")?;
        validate_dancer(&self.follower, "Follower")?;
        Ok(())
    }
}

fn validate_dancer(dancer: &DancerDraft, role: &str) -> Result<(), CoreError> {
    if dancer.first_name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{role} first name is required"
        )));
    }
    if dancer.last_name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{role} last name is required"
        )));
    }
    Ok(())
}
