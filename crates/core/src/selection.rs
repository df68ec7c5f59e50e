//! Selection state for the divisions/levels/dances step.
//!
//! Holds the chosen age divisions (at most two), skill levels (at most
//! two), and the set of selected dances. Updates follow the
//! immutable-update convention used throughout the wizard: every mutator
//! consumes the state and returns a new one.
//!
//! Dances are identified by a structured [`DanceKey`] (category id plus
//! dance name) rather than a single concatenated string, since dance names
//! are only unique within their category.

use serde::{Deserialize, Serialize};

use crate::catalog::DanceCategory;
use crate::error::CoreError;

/// Maximum number of age divisions a partnership may enter.
pub const MAX_AGE_DIVISIONS: usize = 2;

/// Maximum number of skill levels a partnership may enter.
pub const MAX_SKILL_LEVELS: usize = 2;

// ---------------------------------------------------------------------------
// Dance key
// ---------------------------------------------------------------------------

/// Identifies one dance within one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DanceKey {
    pub category_id: String,
    pub dance: String,
}

impl DanceKey {
    pub fn new(category_id: impl Into<String>, dance: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            dance: dance.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The divisions, levels, and dances chosen so far.
///
/// Fields are private so the cardinality caps cannot be bypassed. All
/// three collections preserve insertion order; display ordering of
/// divisions and levels is derived from the catalog, not from here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    age_divisions: Vec<String>,
    skill_levels: Vec<String>,
    dances: Vec<DanceKey>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from complete lists, as received in an API
    /// payload. Unlike the interactive toggles, this is strict: exceeding
    /// a cap or repeating an entry is a validation error rather than a
    /// silent no-op.
    pub fn try_new(
        age_divisions: Vec<String>,
        skill_levels: Vec<String>,
        dances: Vec<DanceKey>,
    ) -> Result<Self, CoreError> {
        if age_divisions.len() > MAX_AGE_DIVISIONS {
            return Err(CoreError::Validation(format!(
                "At most {MAX_AGE_DIVISIONS} age divisions may be selected"
            )));
        }
        if skill_levels.len() > MAX_SKILL_LEVELS {
            return Err(CoreError::Validation(format!(
                "At most {MAX_SKILL_LEVELS} skill levels may be selected"
            )));
        }
        if has_duplicates(&age_divisions) {
            return Err(CoreError::Validation(
                "Duplicate age division in selection".to_string(),
            ));
        }
        if has_duplicates(&skill_levels) {
            return Err(CoreError::Validation(
                "Duplicate skill level in selection".to_string(),
            ));
        }
        if has_duplicates(&dances) {
            return Err(CoreError::Validation(
                "Duplicate dance in selection".to_string(),
            ));
        }
        Ok(Self {
            age_divisions,
            skill_levels,
            dances,
        })
    }

    pub fn age_divisions(&self) -> &[String] {
        &self.age_divisions
    }

    pub fn skill_levels(&self) -> &[String] {
        &self.skill_levels
    }

    pub fn dances(&self) -> &[DanceKey] {
        &self.dances
    }

    /// Check or uncheck an age division.
    ///
    /// Checking while already at the cap is a no-op: the UI presents
    /// unselected checkboxes as disabled once the cap is reached, so an
    /// over-cap request is not an error. Unchecking always removes.
    pub fn with_age_division(mut self, id: &str, checked: bool) -> Self {
        toggle_id(&mut self.age_divisions, id, checked, MAX_AGE_DIVISIONS);
        self
    }

    /// Check or uncheck a skill level. Same cap semantics as
    /// [`with_age_division`](Self::with_age_division).
    pub fn with_skill_level(mut self, id: &str, checked: bool) -> Self {
        toggle_id(&mut self.skill_levels, id, checked, MAX_SKILL_LEVELS);
        self
    }

    /// Select or deselect one dance. There is no cardinality limit on
    /// dances.
    pub fn with_dance(mut self, key: DanceKey, selected: bool) -> Self {
        if selected {
            if !self.dances.contains(&key) {
                self.dances.push(key);
            }
        } else {
            self.dances.retain(|k| *k != key);
        }
        self
    }

    /// Group the selected dances by category display name for the review
    /// step.
    ///
    /// Iterates the selection in insertion order, resolves each key's
    /// category by id and the dance by exact name, and appends the dance
    /// under the category name. Keys that no longer resolve against the
    /// catalog are silently dropped; a stale selection is not an error.
    pub fn grouped_dances(&self, categories: &[DanceCategory]) -> Vec<(String, Vec<String>)> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();

        for key in &self.dances {
            let Some(category) = categories.iter().find(|c| c.id == key.category_id) else {
                continue;
            };
            let Some(dance) = category.dances.iter().find(|d| **d == key.dance) else {
                continue;
            };

            match groups.iter_mut().find(|(name, _)| *name == category.name) {
                Some((_, dances)) => dances.push(dance.clone()),
                None => groups.push((category.name.clone(), vec![dance.clone()])),
            }
        }

        groups
    }
}

fn toggle_id(selected: &mut Vec<String>, id: &str, checked: bool, cap: usize) {
    if checked {
        if selected.len() < cap && !selected.iter().any(|s| s == id) {
            selected.push(id.to_string());
        }
    } else {
        selected.retain(|s| s != id);
    }
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
