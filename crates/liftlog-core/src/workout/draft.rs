//! Unvalidated workout-set input and its conversion into a [`WorkoutSet`].

use std::str::FromStr;

use uuid::Uuid;

use super::{ExerciseItem, RestItem, WorkoutItem, WorkoutSet};
use crate::error::ValidationError;

/// A workout item as entered, before ids are assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDraft {
    Exercise {
        name: String,
        sets: u32,
        reps: u32,
        categories: Vec<String>,
    },
    Rest {
        duration_secs: u32,
    },
}

impl ItemDraft {
    /// Whether the item survives submission.
    ///
    /// Exercises need a name, positive sets and reps, and a category;
    /// rests need a positive duration.
    pub fn is_complete(&self) -> bool {
        match self {
            ItemDraft::Exercise {
                name,
                sets,
                reps,
                categories,
            } => !name.trim().is_empty() && *sets > 0 && *reps > 0 && !categories.is_empty(),
            ItemDraft::Rest { duration_secs } => *duration_secs > 0,
        }
    }

    fn into_item(self) -> WorkoutItem {
        let id = Uuid::new_v4().to_string();
        match self {
            ItemDraft::Exercise {
                name,
                sets,
                reps,
                categories,
            } => {
                let mut unique: Vec<String> = Vec::with_capacity(categories.len());
                for category in categories {
                    if !unique.contains(&category) {
                        unique.push(category);
                    }
                }
                WorkoutItem::Exercise(ExerciseItem {
                    id,
                    name: name.trim().to_string(),
                    sets,
                    reps,
                    categories: unique,
                })
            }
            ItemDraft::Rest { duration_secs } => WorkoutItem::Rest(RestItem { id, duration_secs }),
        }
    }
}

/// Parses `rest:SECS` or `Name:SETS:REPS:Cat,Cat`.
///
/// The name may itself contain `:`; the last three fields are split off
/// from the right.
impl FromStr for ItemDraft {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(secs) = s.strip_prefix("rest:") {
            let duration_secs = secs
                .trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::invalid("rest", format!("'{secs}' is not a number of seconds")))?;
            return Ok(ItemDraft::Rest { duration_secs });
        }

        let mut parts = s.rsplitn(4, ':');
        let categories = parts.next().unwrap_or_default();
        let (Some(reps), Some(sets), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ValidationError::invalid(
                "exercise",
                format!("expected Name:SETS:REPS:Categories, got '{s}'"),
            ));
        };

        let parse_count = |field: &str, raw: &str| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::invalid(field, format!("'{raw}' is not a whole number")))
        };

        Ok(ItemDraft::Exercise {
            name: name.to_string(),
            sets: parse_count("sets", sets)?,
            reps: parse_count("reps", reps)?,
            categories: categories
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}

/// A workout set as entered.
#[derive(Debug, Clone, Default)]
pub struct WorkoutSetDraft {
    pub name: String,
    pub items: Vec<ItemDraft>,
}

impl WorkoutSetDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, item: ItemDraft) -> Self {
        self.items.push(item);
        self
    }

    /// Drop incomplete items and assign fresh ids.
    ///
    /// # Errors
    /// Returns an error if the name is blank or no item survives filtering.
    pub fn build(self) -> Result<WorkoutSet, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::invalid("name", "workout set name is empty"));
        }

        let items: Vec<WorkoutItem> = self
            .items
            .into_iter()
            .filter(ItemDraft::is_complete)
            .map(ItemDraft::into_item)
            .collect();

        if items.is_empty() {
            return Err(ValidationError::EmptyCollection(format!(
                "workout set '{name}' has no complete items"
            )));
        }

        Ok(WorkoutSet {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            items,
        })
    }
}
