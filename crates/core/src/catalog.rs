//! Event configuration catalog: age divisions, skill levels, and dance
//! categories as embedded in an event's configuration record.
//!
//! The catalog is immutable once loaded for a wizard session. Divisions and
//! levels carry a `display_order` that controls presentation; selection
//! order never affects it.

use serde::{Deserialize, Serialize};

/// An age division offered by an event (e.g. "Adult", "Senior I").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDivision {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
    pub display_order: i32,
}

/// A skill level offered by an event (e.g. "Newcomer", "Novice").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub id: String,
    pub name: String,
    pub display_order: i32,
}

/// A dance category grouping individual dances (e.g. "Smooth" with
/// Waltz, Tango, Foxtrot). Dance names are unique within a category but
/// not across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanceCategory {
    pub id: String,
    pub name: String,
    pub dances: Vec<String>,
}

/// Catalog entries that are presented in a configured order.
pub trait DisplayOrdered {
    fn display_order(&self) -> i32;
}

impl DisplayOrdered for AgeDivision {
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

impl DisplayOrdered for SkillLevel {
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// Return a copy of `items` sorted by `display_order` ascending.
pub fn in_display_order<T: DisplayOrdered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(DisplayOrdered::display_order);
    sorted
}

/// Look up an age division's display name by id.
pub fn division_name<'a>(divisions: &'a [AgeDivision], id: &str) -> Option<&'a str> {
    divisions
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.as_str())
}

/// Look up a skill level's display name by id.
pub fn level_name<'a>(levels: &'a [SkillLevel], id: &str) -> Option<&'a str> {
    levels.iter().find(|l| l.id == id).map(|l| l.name.as_str())
}
