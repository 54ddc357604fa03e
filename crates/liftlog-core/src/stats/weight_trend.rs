//! Direction tags for the weight chart.
//!
//! The chart draws three line series (up, down, same), each reading one
//! optional field of [`TrendPoint`]. Both endpoints of a segment carry the
//! segment's tag, so each series connects exactly the segments of its
//! direction and breaks everywhere else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::WeightEntry;

/// Direction of change between two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    /// Classify the step from `previous` to `current`.
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Same
        }
    }
}

/// One chart point, parallel to a [`WeightEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub weight: f64,
    pub up_weight: Option<f64>,
    pub down_weight: Option<f64>,
    pub same_weight: Option<f64>,
}

impl TrendPoint {
    fn untagged(entry: &WeightEntry) -> Self {
        Self {
            date: entry.date,
            weight: entry.weight,
            up_weight: None,
            down_weight: None,
            same_weight: None,
        }
    }

    fn tagged(self, trend: Trend) -> Self {
        let value = Some(self.weight);
        match trend {
            Trend::Up => Self { up_weight: value, ..self },
            Trend::Down => Self { down_weight: value, ..self },
            Trend::Same => Self { same_weight: value, ..self },
        }
    }

    /// The series value for `trend`, if this point belongs to it.
    pub fn weight_for(&self, trend: Trend) -> Option<f64> {
        match trend {
            Trend::Up => self.up_weight,
            Trend::Down => self.down_weight,
            Trend::Same => self.same_weight,
        }
    }

    /// Tags set on this point, in up/down/same order.
    pub fn trends(&self) -> Vec<Trend> {
        [Trend::Up, Trend::Down, Trend::Same]
            .into_iter()
            .filter(|t| self.weight_for(*t).is_some())
            .collect()
    }
}

/// Tag every reading with the direction of the segments it touches.
///
/// Order follows the input sequence, never the dates: a backdated entry is
/// compared with whatever was logged before it. Histories shorter than two
/// readings come back untagged.
pub fn segment(history: &[WeightEntry]) -> Vec<TrendPoint> {
    let trends: Vec<Trend> = history
        .windows(2)
        .map(|pair| Trend::between(pair[0].weight, pair[1].weight))
        .collect();

    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let incoming = i.checked_sub(1).and_then(|j| trends.get(j)).copied();
            let outgoing = trends.get(i).copied();
            [incoming, outgoing]
                .into_iter()
                .flatten()
                .fold(TrendPoint::untagged(entry), TrendPoint::tagged)
        })
        .collect()
}

/// Change in kg from the previous reading, by position; `None` for the first.
pub fn weight_changes(history: &[WeightEntry]) -> Vec<Option<f64>> {
    std::iter::once(None)
        .chain(history.windows(2).map(|pair| Some(pair[1].weight - pair[0].weight)))
        .take(history.len())
        .collect()
}
