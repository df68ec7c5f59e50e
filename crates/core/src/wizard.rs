//! Wizard state machine for the four registration steps.
//!
//! `SelectingEvent -> EnteringPartnership -> SelectingDivisions ->
//! Reviewing`. Forward transitions advance exactly one step and are
//! guarded; backward transitions go to the immediate predecessor, are
//! always permitted, and never clear data entered on steps that are not
//! revisited. Submission itself happens from `Reviewing` and is owned by
//! the API layer.
//!
//! The session is an immutable-update value: every transition consumes
//! the session and returns a new one. Nothing here is shared or mutated
//! in place.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::partnership::PartnershipDraft;
use crate::selection::{DanceKey, SelectionState};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The four steps of the registration wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectingEvent,
    EnteringPartnership,
    SelectingDivisions,
    Reviewing,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::SelectingEvent),
            2 => Ok(Self::EnteringPartnership),
            3 => Ok(Self::SelectingDivisions),
            4 => Ok(Self::Reviewing),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::SelectingEvent => 1,
            Self::EnteringPartnership => 2,
            Self::SelectingDivisions => 3,
            Self::Reviewing => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::SelectingEvent => "Select Event",
            Self::EnteringPartnership => "Partnership Details",
            Self::SelectingDivisions => "Divisions & Levels",
            Self::Reviewing => "Review & Submit",
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One user's wizard session: current step plus everything entered so
/// far. Created empty at wizard start, threaded through each step's
/// handlers, and discarded (reset) after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    step: WizardStep,
    event_id: Option<DbId>,
    partnership: PartnershipDraft,
    selection: SelectionState,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn event_id(&self) -> Option<DbId> {
        self.event_id
    }

    pub fn partnership(&self) -> &PartnershipDraft {
        &self.partnership
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Choose the event to register for. Only valid on the event step;
    /// selecting an event moves the session to the partnership step.
    pub fn select_event(mut self, event_id: DbId) -> Result<Self, CoreError> {
        if self.step != WizardStep::SelectingEvent {
            return Err(CoreError::Validation(
                "An event can only be chosen on the event step".to_string(),
            ));
        }
        self.event_id = Some(event_id);
        self.step = WizardStep::EnteringPartnership;
        Ok(self)
    }

    /// Replace the partnership draft (fields are edited freely; the
    /// advance guard validates them).
    pub fn with_partnership(mut self, partnership: PartnershipDraft) -> Self {
        self.partnership = partnership;
        self
    }

    /// Replace the whole selection (used when rebuilding a session from a
    /// submitted payload).
    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    pub fn toggle_age_division(mut self, id: &str, checked: bool) -> Self {
        self.selection = self.selection.with_age_division(id, checked);
        self
    }

    pub fn toggle_skill_level(mut self, id: &str, checked: bool) -> Self {
        self.selection = self.selection.with_skill_level(id, checked);
        self
    }

    pub fn toggle_dance(mut self, key: DanceKey, selected: bool) -> Self {
        self.selection = self.selection.with_dance(key, selected);
        self
    }

    /// Advance to the next step, enforcing the current step's guard.
    ///
    /// The divisions guard requires at least one division and one level;
    /// dances are not required.
    pub fn advance(mut self) -> Result<Self, CoreError> {
        match self.step {
            WizardStep::SelectingEvent => {
                if self.event_id.is_none() {
                    return Err(CoreError::Validation("No event selected".to_string()));
                }
                self.step = WizardStep::EnteringPartnership;
            }
            WizardStep::EnteringPartnership => {
                self.partnership.validate()?;
                self.step = WizardStep::SelectingDivisions;
            }
            WizardStep::SelectingDivisions => {
                if self.selection.age_divisions().is_empty()
                    || self.selection.skill_levels().is_empty()
                {
                    return Err(CoreError::Validation(
                        "Select at least one age division and one skill level".to_string(),
                    ));
                }
                self.step = WizardStep::Reviewing;
            }
            WizardStep::Reviewing => {
                return Err(CoreError::Validation(
                    "Already at the review step".to_string(),
                ));
            }
        }
        Ok(self)
    }

    /// Go back one step. Always permitted; entered data is kept. On the
    /// first step this is a no-op.
    pub fn back(mut self) -> Self {
        self.step = match self.step {
            WizardStep::SelectingEvent => WizardStep::SelectingEvent,
            WizardStep::EnteringPartnership => WizardStep::SelectingEvent,
            WizardStep::SelectingDivisions => WizardStep::EnteringPartnership,
            WizardStep::Reviewing => WizardStep::SelectingDivisions,
        };
        self
    }

    /// Reset to a fresh session, clearing event, partnership, and
    /// selection. Called after a successful submission.
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Rebuild a session from a complete draft and walk it forward to the
    /// review step, enforcing every advance guard on the way. Used by the
    /// API layer so review/submit payloads pass exactly the same guards
    /// as an interactive session.
    pub fn from_draft(
        event_id: DbId,
        partnership: PartnershipDraft,
        selection: SelectionState,
    ) -> Result<Self, CoreError> {
        Self::new()
            .select_event(event_id)?
            .with_partnership(partnership)
            .advance()?
            .with_selection(selection)
            .advance()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
