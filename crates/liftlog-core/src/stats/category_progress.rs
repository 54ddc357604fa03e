//! Per-category progress scores derived from the session history.
//!
//! Every logged session adds [`CATEGORY_INCREMENT`] to each known category
//! label found on the exercises of its workout set. Scores saturate at
//! [`MAX_CATEGORY_SCORE`], which is also the radar chart's outer ring
//! ([`FULL_MARK`]). This rewards frequency of exposure; it is not a
//! strength model.
//!
//! Sessions are resolved against the *current* set definitions, so editing
//! a set retroactively changes what its past sessions contributed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workout::{Category, WorkoutSession, WorkoutSet, CATEGORY_COUNT};

/// Score added per (session, category label) occurrence.
pub const CATEGORY_INCREMENT: f64 = 0.1;

/// Upper bound of every category score.
pub const MAX_CATEGORY_SCORE: f64 = 10.0;

/// Chart scale maximum reported alongside each score.
pub const FULL_MARK: u32 = 10;

/// Score of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    #[serde(rename = "subject")]
    pub category: Category,
    /// In `[0, MAX_CATEGORY_SCORE]`, rounded to one decimal.
    pub score: f64,
    pub full_mark: u32,
}

/// Scores for all six categories in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressVector {
    scores: [CategoryScore; CATEGORY_COUNT],
}

impl ProgressVector {
    fn from_raw(raw: [f64; CATEGORY_COUNT]) -> Self {
        Self {
            scores: Category::ALL.map(|category| CategoryScore {
                category,
                score: round_to_tenth(raw[category.index()]),
                full_mark: FULL_MARK,
            }),
        }
    }

    /// All scores zero.
    pub fn empty() -> Self {
        Self::from_raw([0.0; CATEGORY_COUNT])
    }

    pub fn score(&self, category: Category) -> f64 {
        self.scores[category.index()].score
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.scores.iter()
    }

    pub fn as_slice(&self) -> &[CategoryScore] {
        &self.scores
    }
}

impl Default for ProgressVector {
    fn default() -> Self {
        Self::empty()
    }
}

/// Round to one decimal place, ties away from zero (0.25 -> 0.3).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate the session history into per-category scores.
///
/// Sessions whose `set_id` matches no set are skipped. When several sets
/// share an id, the first one wins. Labels outside the six known
/// categories are ignored, as are rest items.
pub fn aggregate(sessions: &[WorkoutSession], sets: &[WorkoutSet]) -> ProgressVector {
    let mut by_id: HashMap<&str, &WorkoutSet> = HashMap::with_capacity(sets.len());
    for set in sets {
        by_id.entry(set.id.as_str()).or_insert(set);
    }

    let mut raw = [0.0f64; CATEGORY_COUNT];
    let mut skipped = 0usize;

    for session in sessions {
        let Some(set) = by_id.get(session.set_id.as_str()) else {
            skipped += 1;
            debug!(
                session_id = %session.id,
                set_id = %session.set_id,
                "session references unknown workout set, skipping"
            );
            continue;
        };

        let categories = set
            .exercises()
            .flat_map(|exercise| exercise.categories.iter())
            .filter_map(|label| Category::from_label(label));

        for category in categories {
            let slot = &mut raw[category.index()];
            *slot = (*slot + CATEGORY_INCREMENT).min(MAX_CATEGORY_SCORE);
        }
    }

    if skipped > 0 {
        debug!(skipped, total = sessions.len(), "aggregated progress with dangling sessions");
    }

    ProgressVector::from_raw(raw)
}
