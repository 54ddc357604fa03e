//! Workout sets, their items, and logged sessions.
//!
//! The JSON shape of these types is the persisted shape: field names follow
//! the storage layout (`setId`, `setName`, `type: "exercise"`), so values
//! written by older builds keep loading.

mod draft;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use draft::{ItemDraft, WorkoutSetDraft};

/// Number of progress categories.
pub const CATEGORY_COUNT: usize = 6;

/// Muscle-group / training-type label used for progress scoring.
///
/// The set is closed. Exercises may carry other labels; those are kept
/// as-is in storage but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
    Core,
}

impl Category {
    /// All categories in canonical output order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Strength,
        Category::Cardio,
        Category::Flexibility,
        Category::UpperBody,
        Category::LowerBody,
        Category::Core,
    ];

    /// Display label, identical to the label stored on exercises.
    pub fn label(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
            Category::UpperBody => "Upper Body",
            Category::LowerBody => "Lower Body",
            Category::Core => "Core",
        }
    }

    /// Exact (case-sensitive) label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| {
            ValidationError::invalid("category", format!("unknown category '{}'", s.trim()))
        })
    }
}

/// An exercise step of a workout set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseItem {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Repetitions, or seconds for timed exercises (e.g. plank).
    pub reps: u32,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A rest interval between exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestItem {
    pub id: String,
    #[serde(rename = "duration")]
    pub duration_secs: u32,
}

/// One step of a workout set, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutItem {
    Exercise(ExerciseItem),
    Rest(RestItem),
}

impl WorkoutItem {
    pub fn id(&self) -> &str {
        match self {
            WorkoutItem::Exercise(e) => &e.id,
            WorkoutItem::Rest(r) => &r.id,
        }
    }

    pub fn as_exercise(&self) -> Option<&ExerciseItem> {
        match self {
            WorkoutItem::Exercise(e) => Some(e),
            WorkoutItem::Rest(_) => None,
        }
    }
}

/// A named, ordered template of exercises and rest intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: String,
    pub name: String,
    pub items: Vec<WorkoutItem>,
}

impl WorkoutSet {
    /// Exercise items in execution order, rests skipped.
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseItem> {
        self.items.iter().filter_map(WorkoutItem::as_exercise)
    }

    /// Total scheduled rest in seconds.
    pub fn total_rest_secs(&self) -> u64 {
        self.items
            .iter()
            .map(|item| match item {
                WorkoutItem::Rest(r) => u64::from(r.duration_secs),
                WorkoutItem::Exercise(_) => 0,
            })
            .sum()
    }
}

/// A logged instance of performing a workout set.
///
/// `set_id` is a weak reference and may dangle; `set_name` is a snapshot
/// taken when the session was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    pub set_id: String,
    pub set_name: String,
    pub date: NaiveDate,
    /// Duration in minutes.
    #[serde(rename = "duration")]
    pub duration_min: u32,
}

/// Input for logging a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub set_id: String,
    pub date: NaiveDate,
    pub duration_min: u32,
}
